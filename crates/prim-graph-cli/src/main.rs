//! prim-graph CLI
//!
//! Loads a `.gl` edge-list file and prints its minimum spanning tree.
//!
//! ```bash
//! prim-graph --file graph.gl --root A
//! prim-graph --file graph.gl --root A --format json -vv
//! ```
//!
//! Configuration comes from `--config <FILE>` when given, otherwise from an
//! optional `config/default.toml` and `PRIM_GRAPH__*` environment variables.
//! Logs go to stderr; the report goes to stdout.

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use prim_graph::{GraphConfig, LoggingConfig};

mod error;
mod run;

use error::{CliError, CliExitCode, CliResult};
use run::{OutputFormat, RunOptions};

/// prim-graph - Minimum spanning trees of edge-list graphs
#[derive(Parser, Debug)]
#[command(name = "prim-graph")]
#[command(version)]
#[command(about = "Load a .gl edge-list graph and print its minimum spanning tree")]
struct Cli {
    /// Edge-list file to load
    #[arg(short, long)]
    file: PathBuf,

    /// Root node label (default: prim.root from configuration)
    #[arg(short, long)]
    root: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(path: Option<&PathBuf>) -> CliResult<GraphConfig> {
    let config = match path {
        Some(path) => GraphConfig::from_file(path),
        None => GraphConfig::load(),
    };
    config.map_err(CliError::Config)
}

fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(logging.level.to_ascii_lowercase())),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(logging.with_target)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging needs the config, so a config failure is logged with defaults.
    let config = load_config(cli.config.as_ref());
    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_logging(cli.verbose, &logging);

    let result = match config {
        Ok(config) => {
            let options = RunOptions {
                file: cli.file,
                root: cli.root.unwrap_or_else(|| config.prim.root.clone()),
                format: cli.format,
            };
            run::run(options, config).await
        }
        Err(e) => Err(e),
    };

    let exit_code = match result {
        Ok(()) => {
            debug!("Done");
            CliExitCode::Success
        }
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.into());
}
