pub mod load_tests;
pub mod mst_tests;
