//! Per-node traversal state, kept outside the graph model.

use std::collections::HashMap;

use crate::model::NodeId;

/// Traversal fields of one node during an MST computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalState {
    /// Tree node currently offering the cheapest attachment.
    pub parent: Option<NodeId>,
    /// Whether the node has been extracted into the tree.
    pub in_tree: bool,
}

/// Side table of node → traversal state, owned by one computation.
#[derive(Debug, Clone, Default)]
pub struct TraversalTable {
    states: HashMap<NodeId, TraversalState>,
}

impl TraversalTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: HashMap::with_capacity(capacity),
        }
    }

    /// Reset `node` to no parent, outside the tree.
    pub fn init(&mut self, node: NodeId) {
        self.states.insert(node, TraversalState::default());
    }

    /// Current parent of `node`, if any.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.states.get(&node).and_then(|s| s.parent)
    }

    /// Whether `node` has already joined the tree. Unknown nodes have not.
    pub fn in_tree(&self, node: NodeId) -> bool {
        self.states.get(&node).is_some_and(|s| s.in_tree)
    }

    /// Record `parent` as the new cheapest attachment of `node`.
    pub fn set_parent(&mut self, node: NodeId, parent: NodeId) {
        if let Some(state) = self.states.get_mut(&node) {
            state.parent = Some(parent);
        }
    }

    pub fn mark_in_tree(&mut self, node: NodeId) {
        if let Some(state) = self.states.get_mut(&node) {
            state.in_tree = true;
        }
    }
}
