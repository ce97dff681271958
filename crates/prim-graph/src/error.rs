//! Error types for graph construction, frontier operations and MST computation.
//!
//! Every fallible operation in this crate returns [`GraphResult`]. Errors are
//! returned to the immediate caller and never logged or swallowed here; the
//! binary decides how to report them.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph operations.
///
/// Each variant carries enough context (labels, line numbers) to produce a
/// useful message without access to the graph that raised it.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Graph Model Errors ==========
    /// Node identity is empty or whitespace only.
    #[error("Invalid node identity: identity must be a non-empty label")]
    InvalidIdentity,

    /// Operation references a node that is not registered in this graph.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Edge endpoints are the same node.
    #[error("Self loop rejected on node: {0}")]
    SelfLoop(String),

    /// Edge weight is not a finite number.
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    // ========== Frontier Errors ==========
    /// `extract_min` on an empty frontier.
    #[error("Frontier is empty")]
    EmptyFrontier,

    /// Key inserted into the frontier twice.
    #[error("Frontier already holds an entry for {0}")]
    DuplicateEntry(String),

    // ========== MST Errors ==========
    /// Non-root node extracted without a parent: it is not reachable from the root.
    #[error("Node {0} has no parent in the spanning tree (graph is disconnected from the root)")]
    MissingParent(String),

    /// Edge on a weighted graph carries no weight.
    #[error("Edge {parent} -> {child} has no weight on a weighted graph")]
    MissingWeight { parent: String, child: String },

    /// Computation stopped by a cancellation signal. Partial state is discarded.
    #[error("Operation cancelled")]
    Cancelled,

    // ========== Input Errors ==========
    /// Input contained no header line.
    #[error("Input is empty: expected a '<directed|undirected> <weighted|unweighted>' header")]
    EmptyInput,

    /// Header line is not `<directed|undirected> <weighted|unweighted>`.
    #[error("Invalid header '{0}': expected '<directed|undirected> <weighted|unweighted>'")]
    InvalidHeader(String),

    /// Line does not match the edge-list grammar.
    #[error("Malformed line: {0}")]
    Malformed(String),

    /// Graph cannot be written in the edge-list grammar without changing it.
    #[error("Not representable as an edge list: {0}")]
    NotRepresentable(String),

    /// Error raised while processing a specific input line.
    #[error("Error at line {line} [{content}]: {source}")]
    Line {
        line: usize,
        content: String,
        #[source]
        source: Box<GraphError>,
    },

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== Serialization / IO Errors ==========
    /// Serialization to JSON failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Underlying reader failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl GraphError {
    /// Wrap an error with the line that produced it.
    pub fn at_line(self, line: usize, content: impl Into<String>) -> Self {
        GraphError::Line {
            line,
            content: content.into(),
            source: Box::new(self),
        }
    }

    /// Strip any `Line` wrapping and return the underlying error.
    pub fn root_cause(&self) -> &GraphError {
        match self {
            GraphError::Line { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        GraphError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for GraphError {
    fn from(err: config::ConfigError) -> Self {
        GraphError::InvalidConfig(err.to_string())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::InvalidConfig(err.to_string())
    }
}
