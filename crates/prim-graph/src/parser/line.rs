//! Node and edge lines.

use crate::error::{GraphError, GraphResult};
use crate::model::Graph;

pub(crate) const EDGE_SEPARATOR: char = '=';

/// Apply one cleaned, non-empty body line to `graph`.
///
/// Fields are validated before the graph is touched, so a rejected line
/// leaves the graph unchanged.
///
/// # Errors
/// * `GraphError::Malformed` - more than three fields
/// * `GraphError::InvalidIdentity` - an empty label field
/// * `GraphError::MissingWeight` - `parent=child` on a weighted graph
/// * `GraphError::InvalidWeight` - weight field is not a finite number
/// * `GraphError::SelfLoop` - `parent == child`
pub fn apply_line(graph: &mut Graph, line: &str) -> GraphResult<()> {
    let fields: Vec<&str> = line.split(EDGE_SEPARATOR).map(str::trim).collect();

    match fields.as_slice() {
        [label] => {
            graph.get_or_create_node(label)?;
        }
        [parent, child] => {
            require_labels(parent, child)?;
            if graph.is_weighted() {
                return Err(GraphError::MissingWeight {
                    parent: parent.to_string(),
                    child: child.to_string(),
                });
            }
            add_edge(graph, parent, child, None)?;
        }
        [parent, child, weight] => {
            require_labels(parent, child)?;
            let weight = parse_weight(weight)?;
            add_edge(graph, parent, child, Some(weight))?;
        }
        _ => {
            return Err(GraphError::Malformed(format!(
                "expected 1-3 '{}' separated fields, found {}",
                EDGE_SEPARATOR,
                fields.len()
            )));
        }
    }

    Ok(())
}

fn require_labels(parent: &str, child: &str) -> GraphResult<()> {
    if parent.is_empty() || child.is_empty() {
        return Err(GraphError::InvalidIdentity);
    }
    if parent == child {
        return Err(GraphError::SelfLoop(parent.to_string()));
    }
    Ok(())
}

fn parse_weight(raw: &str) -> GraphResult<f64> {
    let weight: f64 = raw
        .parse()
        .map_err(|_| GraphError::InvalidWeight(format!("'{}' is not a number", raw)))?;

    if !weight.is_finite() {
        return Err(GraphError::InvalidWeight(format!(
            "'{}' is not a finite number",
            raw
        )));
    }
    Ok(weight)
}

fn add_edge(graph: &mut Graph, parent: &str, child: &str, weight: Option<f64>) -> GraphResult<()> {
    let parent = graph.get_or_create_node(parent)?;
    let child = graph.get_or_create_node(child)?;
    graph.add_edge(parent, child, None, weight)?;
    Ok(())
}
