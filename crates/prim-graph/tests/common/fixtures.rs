//! Edge-list fixtures and deterministic generators.
//!
//! Same seed always produces the same graph.

#![allow(dead_code)]

use prim_graph::Graph;

/// Weighted triangle whose tree is A-C:1, C-B:2.
pub const WEIGHTED_TRIANGLE: &str = "undirected weighted\nA=B=4\nA=C=1\nC=B=2\n";

/// Unweighted triangle; every tree edge costs the default 1.0.
pub const UNWEIGHTED_TRIANGLE: &str = "undirected unweighted\nA=B\nB=C\nC=A\n";

/// Two components; `C` and `D` cannot be reached from `A`.
pub const DISCONNECTED: &str = "undirected weighted\nA=B=1\nC=D=1\n";

/// Deterministic hash function for reproducible test data.
///
/// Simple LCG (Linear Congruential Generator).
#[inline]
pub fn deterministic_hash(seed: u32) -> u32 {
    seed.wrapping_mul(1103515245).wrapping_add(12345)
}

/// Edge-list text of a connected undirected weighted graph.
///
/// Nodes are `v0..v{n-1}`. Node `i` first links to an earlier node, then
/// `extra` more edges are added between random distinct nodes. Weights are
/// integers in 1..=50.
pub fn connected_edge_list(n: usize, extra: usize, seed: u32) -> String {
    let mut hash = seed;
    let mut next = || {
        hash = deterministic_hash(hash);
        (hash >> 16) as usize
    };

    let mut text = String::from("undirected weighted\nv0\n");
    for i in 1..n {
        let j = next() % i;
        let w = next() % 50 + 1;
        text.push_str(&format!("v{}=v{}={}\n", j, i, w));
    }
    for _ in 0..extra {
        let (a, b) = (next() % n, next() % n);
        if a != b {
            let w = next() % 50 + 1;
            text.push_str(&format!("v{}=v{}={}\n", a, b, w));
        }
    }
    text
}

/// Parse a fixture, panicking with the loader error on failure.
pub fn load_fixture(text: &str) -> Graph {
    prim_graph::load_str(text).unwrap_or_else(|e| panic!("fixture failed to load: {}", e))
}
