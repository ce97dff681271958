//! Header line and line cleanup.

use crate::error::{GraphError, GraphResult};
use crate::model::Graph;

const DIRECTED: &str = "directed";
const UNDIRECTED: &str = "undirected";
const WEIGHTED: &str = "weighted";
const UNWEIGHTED: &str = "unweighted";

/// Strip line terminators and surrounding whitespace.
pub fn clean(line: &str) -> &str {
    line.trim()
}

/// Build an empty graph from a `<directed|undirected> <weighted|unweighted>` header.
///
/// Keywords are case-insensitive.
///
/// # Errors
/// * `GraphError::EmptyInput` - the line is blank
/// * `GraphError::InvalidHeader` - wrong field count or unknown keyword
pub fn parse_header(line: &str) -> GraphResult<Graph> {
    let line = clean(line);
    if line.is_empty() {
        return Err(GraphError::EmptyInput);
    }

    let fields: Vec<String> = line
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect();

    let [direction, weighting] = fields.as_slice() else {
        return Err(GraphError::InvalidHeader(line.to_string()));
    };

    let directional = match direction.as_str() {
        DIRECTED => true,
        UNDIRECTED => false,
        _ => return Err(GraphError::InvalidHeader(line.to_string())),
    };

    let weighted = match weighting.as_str() {
        WEIGHTED => true,
        UNWEIGHTED => false,
        _ => return Err(GraphError::InvalidHeader(line.to_string())),
    };

    tracing::debug!(directional, weighted, "parsed graph header");
    Ok(Graph::new(directional, weighted))
}

/// Header line for a graph, the inverse of [`parse_header`].
pub(crate) fn header_of(graph: &Graph) -> String {
    format!(
        "{} {}",
        if graph.is_directional() { DIRECTED } else { UNDIRECTED },
        if graph.is_weighted() { WEIGHTED } else { UNWEIGHTED }
    )
}
