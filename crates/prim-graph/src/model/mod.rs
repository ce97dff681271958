//! In-memory graph model.
//!
//! A [`Graph`] owns its nodes and edges. Nodes are identified by a unique,
//! non-empty label; requesting a label twice returns the same [`NodeId`].
//! Edges may be directed or undirected and weighted or unweighted, fixed per
//! graph at construction.
//!
//! The model carries no traversal state. Algorithms that need per-node cost
//! or parent fields keep them in their own side tables.
//!
//! # Example
//!
//! ```
//! use prim_graph::model::Graph;
//!
//! let mut graph = Graph::new(false, true);
//! let a = graph.get_or_create_node("A")?;
//! let b = graph.get_or_create_node("B")?;
//! graph.add_edge(a, b, None, Some(4.0))?;
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edges(b)?.count(), 1); // undirected: visible from both ends
//! # Ok::<(), prim_graph::GraphError>(())
//! ```

mod edge;
mod graph;
mod iter;
mod node;

#[cfg(test)]
mod tests;

pub use self::edge::{Edge, EdgeId};
pub use self::graph::Graph;
pub use self::iter::{Edges, Nodes};
pub use self::node::{Node, NodeId};
