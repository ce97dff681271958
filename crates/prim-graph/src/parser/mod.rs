//! Edge-list text format.
//!
//! ```text
//! undirected weighted      <- header: <directed|undirected> <weighted|unweighted>
//! A=B=4                    <- edge parent=child=weight
//! A=C=1
//! D                        <- isolated node
//! ```
//!
//! Unweighted graphs use `parent=child`; a weight given anyway is parsed and
//! then ignored. Processing stops at the first bad line, and the error names
//! the line number and its content.

mod header;
mod line;
mod loader;


pub use self::header::{clean, parse_header};
pub(crate) use self::header::header_of;
pub(crate) use self::line::EDGE_SEPARATOR;
pub use self::line::apply_line;
pub use self::loader::{load_lines, load_reader, load_str, GraphLoader};
