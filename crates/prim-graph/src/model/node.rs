//! Node and node handle types.

use std::fmt;

use uuid::Uuid;

/// Handle to a node of a specific graph.
///
/// Carries the owning graph's instance id so a handle from one graph can
/// never silently address a node of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: Uuid,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in its graph's insertion order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Instance id of the owning graph.
    #[inline]
    pub fn graph_id(&self) -> Uuid {
        self.graph
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.graph)
    }
}

/// A registered node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    label: String,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: String) -> Self {
        Self { id, label }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's identity within its graph.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}
