//! Prim's MST benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use prim_graph::minimum_spanning_tree;

use super::config;
use super::generators::generate_connected_graph;

pub fn bench_prim_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim_mst");

    for &node_count in config::GRAPH_SIZES {
        // Tree-like graph (sparse)
        let sparse = generate_connected_graph(node_count, config::SPARSE_DEGREE, 1);
        group.bench_with_input(BenchmarkId::new("sparse", node_count), &node_count, |b, _| {
            b.iter(|| minimum_spanning_tree(black_box(&sparse), black_box("n0")))
        });

        // Dense graph
        let dense = generate_connected_graph(node_count, config::DENSE_DEGREE, 2);
        group.bench_with_input(BenchmarkId::new("dense", node_count), &node_count, |b, _| {
            b.iter(|| minimum_spanning_tree(black_box(&dense), black_box("n0")))
        });
    }

    group.finish();
}
