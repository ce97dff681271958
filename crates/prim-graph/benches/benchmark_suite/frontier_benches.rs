//! Frontier benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use prim_graph::Frontier;

use super::config;
use super::generators::generate_costs;

/// Insert every key, then extract until empty.
pub fn bench_frontier_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_drain");

    for &size in config::FRONTIER_SIZES {
        let costs = generate_costs(size, 42);
        group.bench_with_input(BenchmarkId::new("insert_extract", size), &size, |b, _| {
            b.iter(|| {
                let mut frontier = Frontier::with_capacity(costs.len());
                for (key, &cost) in costs.iter().enumerate() {
                    frontier.insert(key, cost).expect("keys are unique");
                }
                let mut last = f64::NEG_INFINITY;
                while let Ok(entry) = frontier.extract_min() {
                    last = entry.cost;
                }
                black_box(last)
            })
        });
    }

    group.finish();
}

/// Start every key at infinity and lower each one once.
pub fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_decrease_key");

    for &size in config::FRONTIER_SIZES {
        let costs = generate_costs(size, 7);
        group.bench_with_input(BenchmarkId::new("change_cost", size), &size, |b, _| {
            b.iter(|| {
                let mut frontier = Frontier::with_capacity(costs.len());
                for key in 0..costs.len() {
                    frontier.insert(key, f64::INFINITY).expect("keys are unique");
                }
                let mut changed = 0usize;
                for (key, &cost) in costs.iter().enumerate() {
                    if frontier.change_cost(&key, usize::MAX, cost) {
                        changed += 1;
                    }
                }
                black_box(changed)
            })
        });
    }

    group.finish();
}
