//! CLI error type and exit code mapping.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | General error (configuration, output, runtime) |
//! | 2 | Invalid input: bad path, extension or edge-list content |
//! | 3 | No spanning tree: unknown root, unreachable node, missing weight |
//! | 130 | Interrupted by Ctrl-C |

use std::path::PathBuf;

use thiserror::Error;

use prim_graph::GraphError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    General = 1,
    InvalidInput = 2,
    MstFailure = 3,
    Interrupted = 130,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input file {}: {reason}", path.display())]
    InvalidFile { path: PathBuf, reason: String },

    #[error("Failed to load graph from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: GraphError,
    },

    #[error("No minimum spanning tree: {0}")]
    Mst(#[source] GraphError),

    #[error("Configuration error: {0}")]
    Config(#[source] GraphError),

    #[error("Failed to write output: {0}")]
    Output(String),

    #[error("Worker task failed: {0}")]
    Task(String),

    #[error("Interrupted")]
    Cancelled,
}

impl CliError {
    /// Wrap a loader error, keeping cancellation distinct.
    pub fn load(path: impl Into<PathBuf>, source: GraphError) -> Self {
        if matches!(source.root_cause(), GraphError::Cancelled) {
            return CliError::Cancelled;
        }
        CliError::Load {
            path: path.into(),
            source,
        }
    }

    /// Wrap an MST error, keeping cancellation distinct.
    pub fn mst(source: GraphError) -> Self {
        if matches!(source, GraphError::Cancelled) {
            return CliError::Cancelled;
        }
        CliError::Mst(source)
    }

    pub fn exit_code(&self) -> CliExitCode {
        match self {
            CliError::InvalidFile { .. } | CliError::Load { .. } => CliExitCode::InvalidInput,
            CliError::Mst(_) => CliExitCode::MstFailure,
            CliError::Cancelled => CliExitCode::Interrupted,
            CliError::Config(_) | CliError::Output(_) | CliError::Task(_) => CliExitCode::General,
        }
    }
}
