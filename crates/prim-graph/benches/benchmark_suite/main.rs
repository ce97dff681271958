//! Benchmark suite for the prim-graph crate.
//!
//! Covers:
//! - Frontier insert / extract / decrease-key throughput
//! - Prim's MST on sparse and dense generated graphs
//! - Edge-list parsing
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package prim-graph
//!
//! # Run specific benchmark
//! cargo bench --package prim-graph -- prim_mst
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod config;
mod generators;

mod frontier_benches;
mod prim_benches;

// ============================================================================
// CRITERION SETUP
// ============================================================================

criterion_group!(
    name = frontier_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(3));
    targets = frontier_benches::bench_frontier_drain, frontier_benches::bench_decrease_key
);

criterion_group!(
    name = prim_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = prim_benches::bench_prim_mst
);

criterion_group!(
    name = parser_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(3));
    targets = parser_benches::bench_load_edge_list
);

criterion_main!(frontier_bench_group, prim_bench_group, parser_bench_group);
