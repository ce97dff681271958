//! Deterministic graph generators for benchmarks.

use prim_graph::{render_edge_list, Graph};

/// Simple LCG so every run benchmarks the same graphs.
#[inline]
pub fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

/// Connected undirected weighted graph with roughly `avg_edges` edges per node.
///
/// Node `i` links to a random earlier node first, so every node is reachable
/// from `n0`.
pub fn generate_connected_graph(node_count: usize, avg_edges: usize, seed: u64) -> Graph {
    let mut state = seed;
    let mut graph = Graph::new(false, true);
    let ids: Vec<_> = (0..node_count)
        .map(|i| {
            graph
                .get_or_create_node(&format!("n{}", i))
                .expect("generated label is never blank")
        })
        .collect();

    for i in 1..node_count {
        let j = (lcg(&mut state) as usize) % i;
        let w = (lcg(&mut state) % 1000) as f64 / 10.0;
        graph
            .add_edge(ids[j], ids[i], None, Some(w))
            .expect("generated edge is valid");
    }

    let extra = node_count * avg_edges.saturating_sub(1);
    for _ in 0..extra {
        let a = (lcg(&mut state) as usize) % node_count;
        let b = (lcg(&mut state) as usize) % node_count;
        if a == b {
            continue;
        }
        let w = (lcg(&mut state) % 1000) as f64 / 10.0;
        graph
            .add_edge(ids[a], ids[b], None, Some(w))
            .expect("generated edge is valid");
    }

    graph
}

/// Edge-list text for a generated graph.
pub fn generate_edge_list(node_count: usize, avg_edges: usize, seed: u64) -> String {
    render_edge_list(&generate_connected_graph(node_count, avg_edges, seed))
        .expect("generated labels and weights are representable")
}

/// Deterministic costs for frontier benchmarks.
pub fn generate_costs(count: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..count).map(|_| (lcg(&mut state) % 100_000) as f64).collect()
}
