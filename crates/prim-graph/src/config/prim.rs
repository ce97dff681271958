//! Configuration for Prim's minimum spanning tree.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Defaults for MST computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrimConfig {
    /// Label of the root node used when the caller does not pick one.
    /// Default: "r"
    pub root: String,

    /// Cost assigned to every edge of an unweighted graph.
    /// Must be finite and positive. Default: 1.0
    pub unweighted_cost: f64,
}

impl Default for PrimConfig {
    fn default() -> Self {
        Self {
            root: "r".to_string(),
            unweighted_cost: 1.0,
        }
    }
}

impl PrimConfig {
    /// Validate root label and unweighted edge cost.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.root.trim().is_empty() {
            return Err(GraphError::InvalidConfig(
                "prim.root must be a non-empty label".to_string(),
            ));
        }

        if !self.unweighted_cost.is_finite() || self.unweighted_cost <= 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "prim.unweighted_cost must be finite and positive (got {})",
                self.unweighted_cost
            )));
        }

        Ok(())
    }
}
