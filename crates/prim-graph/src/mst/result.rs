//! MST result types.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::GraphResult;
use crate::model::Graph;

/// One tree edge: `child` attached to `parent` at `cost`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstEdge {
    pub parent: String,
    pub child: String,
    pub cost: f64,
}

/// Result of a successful MST computation.
#[derive(Debug, Clone, Serialize)]
pub struct MstResult {
    /// The tree as a new graph with the source graph's flags.
    #[serde(skip)]
    pub graph: Graph,

    /// Root label.
    pub root: String,

    /// Tree edges in extraction order.
    pub edges: Vec<MstEdge>,

    /// Node labels in extraction order, root first.
    pub order: Vec<String>,

    /// Sum of all edge costs.
    pub total_weight: f64,
}

impl MstResult {
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges and total weight as text, one `parent-child:cost` per line.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for edge in &self.edges {
            let _ = writeln!(out, "{}-{}:{}", edge.parent, edge.child, edge.cost);
        }
        let _ = write!(out, "total weight: {}", self.total_weight);
        out
    }

    /// Pretty-printed JSON of the root, edges, order and total weight.
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
