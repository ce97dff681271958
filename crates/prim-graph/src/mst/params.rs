//! Parameters for Prim's algorithm.

use crate::cancel::CancelToken;
use crate::config::PrimConfig;

/// Parameters for an MST computation.
#[derive(Debug, Clone)]
pub struct PrimParams {
    /// Label of the root node.
    pub root: String,

    /// Cost of every edge on an unweighted graph (default: 1.0).
    pub unweighted_cost: f64,

    /// Cancellation token polled between steps (None = never cancelled).
    pub cancel: Option<CancelToken>,
}

impl Default for PrimParams {
    fn default() -> Self {
        Self::from_config(&PrimConfig::default())
    }
}

impl PrimParams {
    /// Parameters rooted at `root` with default costs.
    pub fn new(root: impl Into<String>) -> Self {
        Self::default().root(root)
    }

    /// Parameters taken from configuration.
    pub fn from_config(config: &PrimConfig) -> Self {
        Self {
            root: config.root.clone(),
            unweighted_cost: config.unweighted_cost,
            cancel: None,
        }
    }

    /// Builder: set the root label.
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Builder: set the unweighted edge cost.
    #[must_use]
    pub fn unweighted_cost(mut self, cost: f64) -> Self {
        self.unweighted_cost = cost;
        self
    }

    /// Builder: attach a cancellation token.
    #[must_use]
    pub fn cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
