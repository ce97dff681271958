//! Weighted Graphs and Prim's Minimum Spanning Tree
//!
//! This crate loads directed or undirected, weighted or unweighted graphs
//! from a line-oriented edge-list format and computes minimum spanning trees
//! with Prim's algorithm over an indexed decrease-key priority frontier.
//!
//! # Architecture
//!
//! - **model**: Graph container with label-unique nodes and flagged edges
//! - **frontier**: Min-priority frontier with decrease-key and stable ties
//! - **mst**: Prim's algorithm, traversal side table and tree result
//! - **parser**: Edge-list header and line parsing, streaming loader
//! - **render**: Adjacency and edge-list text output
//! - **config**: Loader, MST and logging configuration
//! - **cancel**: Cooperative cancellation token
//! - **error**: Error handling with GraphError
//!
//! # Example
//!
//! ```
//! use prim_graph::{load_str, minimum_spanning_tree, GraphResult};
//!
//! fn example() -> GraphResult<()> {
//!     let graph = load_str("undirected weighted\nA=B=4\nA=C=1\nC=B=2\n")?;
//!     let mst = minimum_spanning_tree(&graph, "A")?;
//!     assert_eq!(mst.total_weight, 3.0);
//!     assert_eq!(mst.summary(), "A-C:1\nC-B:2\ntotal weight: 3");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod frontier;
pub mod model;
pub mod mst;
pub mod parser;
pub mod render;

// Re-exports for convenience
pub use cancel::CancelToken;
pub use config::{GraphConfig, LoaderConfig, LoggingConfig, PrimConfig};
pub use error::{GraphError, GraphResult};
pub use frontier::{Frontier, FrontierEntry};
pub use model::{Edge, EdgeId, Graph, Node, NodeId};
pub use mst::{minimum_spanning_tree, prim_mst, MstEdge, MstResult, PrimParams};
pub use parser::{load_reader, load_str, GraphLoader};
pub use render::{render_adjacency, render_edge_list};
