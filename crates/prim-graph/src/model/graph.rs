//! The graph container.

use std::collections::HashMap;

use uuid::Uuid;

use crate::cancel::CancelToken;
use crate::error::{GraphError, GraphResult};

use super::edge::{Edge, EdgeId};
use super::iter::{Edges, Nodes};
use super::node::{Node, NodeId};

/// Directed or undirected, weighted or unweighted graph.
///
/// Flags are fixed at construction. Nodes and edges are kept in insertion
/// order so enumeration and rendering are deterministic.
#[derive(Debug, Clone)]
pub struct Graph {
    id: Uuid,
    directional: bool,
    weighted: bool,
    nodes: Vec<Node>,
    by_label: HashMap<String, usize>,
    edges: Vec<Edge>,
    /// Per node, indices into `edges` of every edge traversable from it.
    incident: Vec<Vec<usize>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(directional: bool, weighted: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            directional,
            weighted,
            nodes: Vec::new(),
            by_label: HashMap::new(),
            edges: Vec::new(),
            incident: Vec::new(),
        }
    }

    /// Create an empty graph with the same flags as `other`.
    pub fn with_flags_of(other: &Graph) -> Self {
        Self::new(other.directional, other.weighted)
    }

    /// Instance id, unique per graph.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn is_directional(&self) -> bool {
        self.directional
    }

    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the node registered under `identity`, creating it if needed.
    ///
    /// # Errors
    /// * `GraphError::InvalidIdentity` - `identity` is empty or whitespace only
    pub fn get_or_create_node(&mut self, identity: &str) -> GraphResult<NodeId> {
        if identity.trim().is_empty() {
            return Err(GraphError::InvalidIdentity);
        }

        if let Some(&index) = self.by_label.get(identity) {
            return Ok(self.node_id(index));
        }

        let id = self.node_id(self.nodes.len());
        self.nodes.push(Node::new(id, identity.to_string()));
        self.incident.push(Vec::new());
        self.by_label.insert(identity.to_string(), id.index);

        tracing::trace!(label = identity, index = id.index, "registered node");
        Ok(id)
    }

    /// Insert an edge between two registered nodes.
    ///
    /// On unweighted graphs `weight` is ignored. On undirected graphs the edge
    /// is reachable from both endpoints.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - an endpoint does not belong to this graph
    /// * `GraphError::SelfLoop` - `parent == child`
    /// * `GraphError::InvalidWeight` - weighted graph and `weight` is NaN or infinite
    pub fn add_edge(
        &mut self,
        parent: NodeId,
        child: NodeId,
        label: Option<String>,
        weight: Option<f64>,
    ) -> GraphResult<EdgeId> {
        self.check(parent)?;
        self.check(child)?;

        if parent == child {
            return Err(GraphError::SelfLoop(self.label_of(parent).to_string()));
        }

        let weight = if self.weighted {
            match weight {
                Some(w) if !w.is_finite() => {
                    return Err(GraphError::InvalidWeight(format!(
                        "edge {} -> {} has non-finite weight {}",
                        self.label_of(parent),
                        self.label_of(child),
                        w
                    )));
                }
                w => w,
            }
        } else {
            None
        };

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            id,
            parent,
            child,
            label,
            weight,
        });

        self.incident[parent.index].push(id.0);
        if !self.directional {
            self.incident[child.index].push(id.0);
        }

        tracing::trace!(
            parent = self.label_of(parent),
            child = self.label_of(child),
            ?weight,
            "added edge"
        );
        Ok(id)
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> GraphResult<&Node> {
        self.check(id)?;
        Ok(&self.nodes[id.index])
    }

    /// Look up a node by label.
    pub fn find_node(&self, identity: &str) -> Option<NodeId> {
        self.by_label.get(identity).map(|&index| self.node_id(index))
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.by_label.contains_key(identity)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Label of a node of this graph. Empty for foreign handles.
    pub fn label_of(&self, id: NodeId) -> &str {
        if id.graph != self.id {
            return "";
        }
        self.nodes.get(id.index).map(Node::label).unwrap_or("")
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(&self.nodes, None)
    }

    /// All nodes in insertion order, stopping when `cancel` fires.
    pub fn nodes_until<'a>(&'a self, cancel: &'a CancelToken) -> Nodes<'a> {
        Nodes::new(&self.nodes, Some(cancel))
    }

    /// Edges traversable from `node`: outgoing edges on directed graphs,
    /// every incident edge on undirected graphs.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - `node` does not belong to this graph
    pub fn edges(&self, node: NodeId) -> GraphResult<Edges<'_>> {
        self.check(node)?;
        Ok(Edges::new(&self.edges, &self.incident[node.index], None))
    }

    /// Like [`Graph::edges`], stopping when `cancel` fires.
    pub fn edges_until<'a>(
        &'a self,
        node: NodeId,
        cancel: &'a CancelToken,
    ) -> GraphResult<Edges<'a>> {
        self.check(node)?;
        Ok(Edges::new(
            &self.edges,
            &self.incident[node.index],
            Some(cancel),
        ))
    }

    /// Every edge once, in insertion order.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Sum of all edge weights. Unweighted edges count as zero.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().filter_map(Edge::weight).sum()
    }

    #[inline]
    fn node_id(&self, index: usize) -> NodeId {
        NodeId {
            graph: self.id,
            index,
        }
    }

    fn check(&self, id: NodeId) -> GraphResult<()> {
        if id.graph != self.id || id.index >= self.nodes.len() {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        Ok(())
    }
}
