//! Minimum spanning tree via Prim's algorithm.
//!
//! Grows a tree from a chosen root. Every node starts in the frontier with
//! infinite cost (the root with zero); each extraction adds the cheapest
//! reachable node to the tree and relaxes its incident edges, lowering the
//! cost of neighbors still in the frontier.
//!
//! # Edge Cost
//!
//! - Weighted graphs: the edge weight. An edge without one fails with
//!   `GraphError::MissingWeight`.
//! - Unweighted graphs: `PrimParams::unweighted_cost` (default 1.0).
//!
//! # Failure Modes
//!
//! - Root label not in the graph: `GraphError::UnknownNode`.
//! - A node the root cannot reach: `GraphError::MissingParent`. No forest is
//!   produced.
//! - Cancellation: `GraphError::Cancelled`.
//!
//! On any error the partially built tree is dropped.
//!
//! # Example
//!
//! ```
//! use prim_graph::model::Graph;
//! use prim_graph::mst::minimum_spanning_tree;
//!
//! let mut graph = Graph::new(false, true);
//! let a = graph.get_or_create_node("A")?;
//! let b = graph.get_or_create_node("B")?;
//! let c = graph.get_or_create_node("C")?;
//! graph.add_edge(a, b, None, Some(4.0))?;
//! graph.add_edge(a, c, None, Some(1.0))?;
//! graph.add_edge(c, b, None, Some(2.0))?;
//!
//! let mst = minimum_spanning_tree(&graph, "A")?;
//! assert_eq!(mst.total_weight, 3.0);
//! assert_eq!(mst.edge_count(), 2);
//! # Ok::<(), prim_graph::GraphError>(())
//! ```

mod algorithm;
mod params;
mod result;
mod state;

#[cfg(test)]
mod tests;

pub use self::algorithm::{minimum_spanning_tree, prim_mst};
pub use self::params::PrimParams;
pub use self::result::{MstEdge, MstResult};
pub use self::state::{TraversalState, TraversalTable};
