//! Core Prim's algorithm implementation.

use std::collections::HashMap;

use crate::cancel::CancelToken;
use crate::error::{GraphError, GraphResult};
use crate::frontier::Frontier;
use crate::model::{Edge, Graph, NodeId};

use super::params::PrimParams;
use super::result::{MstEdge, MstResult};
use super::state::TraversalTable;

/// Compute a minimum spanning tree of `graph` rooted at `params.root`.
///
/// # Arguments
/// * `graph` - Source graph, left untouched
/// * `params` - Root, unweighted edge cost and optional cancellation token
///
/// # Returns
/// * `Ok(MstResult)` - Tree with one node per source node
/// * `Err(GraphError::UnknownNode)` - Root label not in the graph
/// * `Err(GraphError::MissingParent)` - Some node is unreachable from the root
/// * `Err(GraphError::MissingWeight)` - Weighted graph edge without a weight
/// * `Err(GraphError::Cancelled)` - Token fired before completion
///
/// # Example
///
/// ```rust,ignore
/// let params = PrimParams::new("A").cancel(token.clone());
/// let mst = prim_mst(&graph, &params)?;
/// println!("{}", mst.summary());
/// ```
pub fn prim_mst(graph: &Graph, params: &PrimParams) -> GraphResult<MstResult> {
    let root = graph
        .find_node(&params.root)
        .ok_or_else(|| GraphError::UnknownNode(params.root.clone()))?;
    let cancel = params.cancel.clone().unwrap_or_default();

    let mut table = TraversalTable::with_capacity(graph.node_count());
    let mut frontier: Frontier<NodeId> = Frontier::with_capacity(graph.node_count());

    for node in graph.nodes_until(&cancel) {
        let cost = if node.id() == root { 0.0 } else { f64::INFINITY };
        table.init(node.id());
        frontier.insert(node.id(), cost)?;
    }
    ensure_active(&cancel)?;

    let mut output = Graph::with_flags_of(graph);
    let mut placed: HashMap<NodeId, NodeId> = HashMap::with_capacity(graph.node_count());
    let mut edges = Vec::with_capacity(graph.node_count().saturating_sub(1));
    let mut order = Vec::with_capacity(graph.node_count());

    // Root has cost 0 and every other node infinity, so it comes out first.
    let first = frontier.extract_min()?;
    debug_assert_eq!(first.key, root);
    let root_label = graph.label_of(first.key);
    tracing::debug!(root = root_label, "adding root node to MST");

    table.mark_in_tree(first.key);
    placed.insert(first.key, output.get_or_create_node(root_label)?);
    order.push(root_label.to_string());
    relax(graph, first.key, &mut frontier, &mut table, params, &cancel)?;

    while !frontier.is_empty() {
        ensure_active(&cancel)?;

        let entry = frontier.extract_min()?;
        let label = graph.label_of(entry.key);

        let parent = table
            .parent(entry.key)
            .ok_or_else(|| GraphError::MissingParent(label.to_string()))?;
        debug_assert_eq!(entry.parent, Some(parent));
        let parent_out = placed
            .get(&parent)
            .copied()
            .ok_or_else(|| GraphError::MissingParent(label.to_string()))?;

        tracing::debug!(
            node = label,
            parent = graph.label_of(parent),
            cost = entry.cost,
            remaining = frontier.size(),
            "adding node to MST"
        );

        table.mark_in_tree(entry.key);
        let child_out = output.get_or_create_node(label)?;
        placed.insert(entry.key, child_out);
        output.add_edge(parent_out, child_out, None, Some(entry.cost))?;

        edges.push(MstEdge {
            parent: graph.label_of(parent).to_string(),
            child: label.to_string(),
            cost: entry.cost,
        });
        order.push(label.to_string());

        relax(graph, entry.key, &mut frontier, &mut table, params, &cancel)?;
    }

    let total_weight: f64 = edges.iter().map(|e| e.cost).sum();
    tracing::debug!(
        nodes = order.len(),
        edges = edges.len(),
        total_weight,
        "MST complete"
    );

    Ok(MstResult {
        graph: output,
        root: root_label.to_string(),
        edges,
        order,
        total_weight,
    })
}

/// Compute a minimum spanning tree rooted at `root` with default parameters.
pub fn minimum_spanning_tree(graph: &Graph, root: &str) -> GraphResult<MstResult> {
    prim_mst(graph, &PrimParams::new(root))
}

/// Offer `node` as the new parent to every neighbor not yet in the tree.
fn relax(
    graph: &Graph,
    node: NodeId,
    frontier: &mut Frontier<NodeId>,
    table: &mut TraversalTable,
    params: &PrimParams,
    cancel: &CancelToken,
) -> GraphResult<()> {
    for edge in graph.edges_until(node, cancel)? {
        let other = edge.other(node);
        if table.in_tree(other) {
            continue;
        }

        let cost = edge_cost(graph, edge, params)?;
        if frontier.change_cost(&other, node, cost) {
            table.set_parent(other, node);
            tracing::trace!(
                node = graph.label_of(other),
                via = graph.label_of(node),
                cost,
                "lowered frontier cost"
            );
        }
    }

    ensure_active(cancel)
}

fn edge_cost(graph: &Graph, edge: &Edge, params: &PrimParams) -> GraphResult<f64> {
    if !graph.is_weighted() {
        return Ok(params.unweighted_cost);
    }

    edge.weight().ok_or_else(|| GraphError::MissingWeight {
        parent: graph.label_of(edge.parent()).to_string(),
        child: graph.label_of(edge.child()).to_string(),
    })
}

#[inline]
fn ensure_active(cancel: &CancelToken) -> GraphResult<()> {
    if cancel.is_cancelled() {
        return Err(GraphError::Cancelled);
    }
    Ok(())
}
