//! Load, compute and print.

use std::fs::File;
use std::future::Future;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use prim_graph::{
    prim_mst, render_adjacency, CancelToken, Graph, GraphConfig, GraphError, GraphLoader,
    LoaderConfig, MstResult, PrimParams,
};

use crate::error::{CliError, CliResult};

/// Output format of the MST report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Input graph, tree and summary as text
    Text,
    /// Tree as JSON
    Json,
}

/// Everything one run needs, resolved from flags and configuration.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub file: PathBuf,
    pub root: String,
    pub format: OutputFormat,
}

/// Reject paths that do not exist, are directories, or lack the configured
/// extension.
pub fn validate_input_path(path: &Path, loader: &LoaderConfig) -> CliResult<()> {
    let invalid = |reason: String| CliError::InvalidFile {
        path: path.to_path_buf(),
        reason,
    };

    let name = path.to_string_lossy();
    if !name.ends_with(&loader.file_extension) || name.len() <= loader.file_extension.len() {
        return Err(invalid(format!(
            "expected a file with extension {}",
            loader.file_extension
        )));
    }

    let metadata = std::fs::metadata(path).map_err(|e| invalid(e.to_string()))?;
    if metadata.is_dir() {
        return Err(invalid("is a directory".to_string()));
    }

    Ok(())
}

/// Stream `reader` into a graph, checking `cancel` between lines.
pub fn load_graph<R: BufRead>(
    reader: R,
    loader: &LoaderConfig,
    cancel: &CancelToken,
) -> prim_graph::GraphResult<Graph> {
    let mut graph_loader = GraphLoader::with_config(loader.clone());

    for line in reader.lines() {
        if cancel.is_cancelled() {
            return Err(GraphError::Cancelled);
        }
        let line =
            line.map_err(|e| GraphError::from(e).at_line(graph_loader.lines_read() + 1, ""))?;
        graph_loader.feed(&line)?;
    }

    graph_loader.finish()
}

/// Validate, load and compute. Runs on a blocking thread.
pub fn load_and_compute(
    options: &RunOptions,
    config: &GraphConfig,
    cancel: &CancelToken,
) -> CliResult<(Graph, MstResult)> {
    validate_input_path(&options.file, &config.loader)?;

    let file = File::open(&options.file).map_err(|e| CliError::InvalidFile {
        path: options.file.clone(),
        reason: e.to_string(),
    })?;
    let graph = load_graph(BufReader::new(file), &config.loader, cancel)
        .map_err(|e| CliError::load(&options.file, e))?;
    info!(
        file = %options.file.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Loaded graph"
    );

    let params = PrimParams::from_config(&config.prim)
        .root(options.root.clone())
        .cancel(cancel.clone());
    let mst = prim_mst(&graph, &params).map_err(CliError::mst)?;
    info!(
        root = %mst.root,
        edges = mst.edge_count(),
        total_weight = mst.total_weight,
        "Computed minimum spanning tree"
    );

    Ok((graph, mst))
}

/// Write the report for `format` to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    input: &Graph,
    mst: &MstResult,
) -> CliResult<()> {
    let io = |e: std::io::Error| CliError::Output(e.to_string());

    match format {
        OutputFormat::Text => {
            writeln!(out, "Input Graph").map_err(io)?;
            writeln!(out, "{}", render_adjacency(input)).map_err(io)?;
            writeln!(out).map_err(io)?;
            writeln!(out, "PRIM Graph").map_err(io)?;
            writeln!(out, "{}", render_adjacency(&mst.graph)).map_err(io)?;
            writeln!(out).map_err(io)?;
            writeln!(out, "{}", mst.summary()).map_err(io)?;
        }
        OutputFormat::Json => {
            let json = mst
                .to_json()
                .map_err(|e| CliError::Output(e.to_string()))?;
            writeln!(out, "{}", json).map_err(io)?;
        }
    }

    out.flush().map_err(io)
}

/// Wait for `worker`, firing `cancel` if `interrupt` resolves first.
///
/// An interrupt source that fails to install is logged and ignored; the worker
/// then runs to completion.
async fn join_or_interrupt<T, S>(
    mut worker: JoinHandle<T>,
    interrupt: S,
    cancel: &CancelToken,
) -> Result<T, JoinError>
where
    S: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        biased;

        joined = &mut worker => joined,

        signal = interrupt => {
            match signal {
                Ok(()) => {
                    info!("Interrupt received, cancelling");
                    cancel.cancel();
                }
                Err(e) => warn!(error = %e, "Ctrl-C handler unavailable, running to completion"),
            }
            // The worker polls the token and returns promptly once cancelled.
            worker.await
        }
    }
}

/// Run the computation on a blocking task, cancelling it on Ctrl-C.
pub async fn run(options: RunOptions, config: GraphConfig) -> CliResult<()> {
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();
    let worker_options = options.clone();

    let worker = tokio::task::spawn_blocking(move || {
        load_and_compute(&worker_options, &config, &worker_cancel)
    });

    let outcome = join_or_interrupt(worker, tokio::signal::ctrl_c(), &cancel).await;

    let (graph, mst) = outcome.map_err(|e| CliError::Task(e.to_string()))??;
    debug!(format = ?options.format, "Writing report");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, options.format, &graph, &mst)
}
