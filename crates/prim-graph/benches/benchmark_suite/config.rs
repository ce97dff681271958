//! Benchmark configuration constants.

/// Node counts for graph benchmarks
pub const GRAPH_SIZES: &[usize] = &[100, 1000, 10000];

/// Frontier sizes for queue benchmarks
pub const FRONTIER_SIZES: &[usize] = &[1000, 10000, 100000];

/// Average edges per node for the sparse and dense generators
pub const SPARSE_DEGREE: usize = 2;
pub const DENSE_DEGREE: usize = 10;
