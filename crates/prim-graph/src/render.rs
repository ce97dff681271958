//! Deterministic text rendering of graphs.
//!
//! Output follows insertion order, so rendering the same graph twice, or two
//! graphs built from the same lines, gives identical text.

use std::fmt::{self, Write as _};

use crate::error::{GraphError, GraphResult};
use crate::model::{Edge, Graph};
use crate::parser::{header_of, EDGE_SEPARATOR};

/// Adjacency listing: the header, then one line per node.
///
/// ```text
/// undirected weighted
/// A -> B(4), C(1)
/// B -> A(4), C(2)
/// C -> A(1), B(2)
/// ```
///
/// Weights are omitted on unweighted graphs and for weightless edges.
pub fn render_adjacency(graph: &Graph) -> String {
    let mut out = header_of(graph);

    for node in graph.nodes() {
        let _ = write!(out, "\n{} ->", node.label());

        // Handles come from the graph itself, so edges() cannot fail here.
        let Ok(edges) = graph.edges(node.id()) else {
            continue;
        };
        for (i, edge) in edges.enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            let other = graph.label_of(edge.other(node.id()));
            let _ = write!(out, "{}{}{}", separator, other, weight_suffix(edge));
        }
    }

    out
}

/// Edge-list form accepted by the parser: header, every node as a bare line
/// (fixing node order), then every edge once.
///
/// Edge labels are not part of the grammar and are dropped.
///
/// # Errors
/// * `GraphError::NotRepresentable` - a node label contains `=` or has
///   leading or trailing whitespace, so the parser would read it differently
/// * `GraphError::MissingWeight` - weighted graph with a weightless edge
pub fn render_edge_list(graph: &Graph) -> GraphResult<String> {
    let mut out = header_of(graph);

    for node in graph.nodes() {
        check_label(node.label())?;
        let _ = write!(out, "\n{}", node.label());
    }

    for edge in graph.all_edges() {
        let parent = graph.label_of(edge.parent());
        let child = graph.label_of(edge.child());
        match edge.weight() {
            Some(w) => {
                let _ = write!(out, "\n{}={}={}", parent, child, w);
            }
            None if graph.is_weighted() => {
                return Err(GraphError::MissingWeight {
                    parent: parent.to_string(),
                    child: child.to_string(),
                });
            }
            None => {
                let _ = write!(out, "\n{}={}", parent, child);
            }
        }
    }

    Ok(out)
}

fn check_label(label: &str) -> GraphResult<()> {
    if label.contains(EDGE_SEPARATOR) {
        return Err(GraphError::NotRepresentable(format!(
            "label '{}' contains '{}'",
            label, EDGE_SEPARATOR
        )));
    }
    if label.trim() != label {
        return Err(GraphError::NotRepresentable(format!(
            "label '{}' has surrounding whitespace",
            label
        )));
    }
    Ok(())
}

fn weight_suffix(edge: &Edge) -> String {
    edge.weight()
        .map(|w| format!("({})", w))
        .unwrap_or_default()
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_adjacency(self))
    }
}
