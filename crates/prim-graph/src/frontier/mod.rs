//! Priority frontier: an indexed binary min-heap with decrease-key.
//!
//! Entries are ordered by cost, then by insertion sequence, so equal costs
//! come out first-inserted-first. A key → position map is updated on every
//! swap, which keeps `change_cost` at O(log n) instead of a linear search.
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `insert` | O(log n) | duplicate keys rejected |
//! | `extract_min` | O(log n) | `EmptyFrontier` when empty |
//! | `change_cost` | O(log n) | decrease only; anything else is a silent no-op |
//!
//! # Example
//!
//! ```
//! use prim_graph::frontier::Frontier;
//!
//! let mut frontier = Frontier::new();
//! frontier.insert("a", f64::INFINITY)?;
//! frontier.insert("b", 3.0)?;
//!
//! assert!(frontier.change_cost(&"a", "b", 1.0));
//! assert!(!frontier.change_cost(&"a", "b", 2.0)); // increase ignored
//!
//! assert_eq!(frontier.extract_min()?.key, "a");
//! # Ok::<(), prim_graph::GraphError>(())
//! ```

mod entry;
mod heap;


pub use self::entry::FrontierEntry;
pub use self::heap::Frontier;
