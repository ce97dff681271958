//! Edge types.

use super::node::NodeId;

/// Handle to an edge, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Connection between two nodes of the same graph.
///
/// `weight` is always `None` on unweighted graphs. On weighted graphs it is
/// `None` only when the caller inserted the edge without one.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub(crate) id: EdgeId,
    pub(crate) parent: NodeId,
    pub(crate) child: NodeId,
    pub(crate) label: Option<String>,
    pub(crate) weight: Option<f64>,
}

impl Edge {
    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    #[inline]
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    #[inline]
    pub fn child(&self) -> NodeId {
        self.child
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// The endpoint opposite `node`.
    ///
    /// Returns the child when `node` is not an endpoint at all; callers only
    /// ask about edges obtained from `Graph::edges(node)`.
    #[inline]
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.child == node {
            self.parent
        } else {
            self.child
        }
    }
}
