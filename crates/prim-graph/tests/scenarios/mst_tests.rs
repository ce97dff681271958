//! Minimum spanning trees of loaded graphs.

use std::collections::HashSet;

use prim_graph::{
    load_str, minimum_spanning_tree, prim_mst, CancelToken, GraphConfig, GraphError, PrimParams,
};

use crate::common::{fixtures, helpers};

#[test]
fn test_weighted_triangle_tree() {
    let graph = fixtures::load_fixture(fixtures::WEIGHTED_TRIANGLE);
    let mst = minimum_spanning_tree(&graph, "A").unwrap();

    assert_eq!(mst.summary(), "A-C:1\nC-B:2\ntotal weight: 3");
    assert_eq!(mst.order, vec!["A", "C", "B"]);
    assert_eq!(mst.graph.total_weight(), 3.0);
}

#[test]
fn test_unweighted_triangle_tree() {
    let graph = fixtures::load_fixture(fixtures::UNWEIGHTED_TRIANGLE);
    let mst = minimum_spanning_tree(&graph, "A").unwrap();

    assert_eq!(mst.edge_count(), 2);
    assert_eq!(mst.total_weight, 2.0);
    assert!(!mst.graph.is_weighted());
}

#[test]
fn test_disconnected_graph_has_no_tree() {
    let graph = fixtures::load_fixture(fixtures::DISCONNECTED);
    let err = minimum_spanning_tree(&graph, "A").unwrap_err();
    assert!(matches!(err, GraphError::MissingParent(ref label) if label == "C"));
}

#[test]
fn test_four_field_line_stops_before_mst() {
    // Loading fails on the malformed line, so no tree is ever computed.
    let err = load_str("undirected weighted\nA=B=C=1\n").unwrap_err();
    assert!(matches!(err, GraphError::Line { line: 2, .. }));
}

#[test]
fn test_generated_graphs_span_every_node() {
    for seed in 0..10u32 {
        let n = 50 + seed as usize * 10;
        let graph = fixtures::load_fixture(&fixtures::connected_edge_list(n, n, seed));
        let mst = minimum_spanning_tree(&graph, "v0").unwrap();

        assert_eq!(mst.node_count(), n);
        assert_eq!(mst.edge_count(), n - 1);

        let children: HashSet<&str> = mst.edges.iter().map(|e| e.child.as_str()).collect();
        assert_eq!(children.len(), n - 1, "each node entered the tree once");
        assert!(!children.contains("v0"), "root is never a child");

        assert_eq!(helpers::summary_edge_sum(&mst.summary()), mst.total_weight);
    }
}

#[test]
fn test_tree_weight_not_above_any_spanning_path() {
    // The generator's first n-1 edges already form a spanning tree.
    let n = 200;
    let text = fixtures::connected_edge_list(n, 400, 11);
    let skeleton_weight: f64 = text
        .lines()
        .skip(2)
        .take(n - 1)
        .filter_map(|l| l.rsplit('=').next())
        .map(|w| w.parse::<f64>().unwrap())
        .sum();

    let graph = fixtures::load_fixture(&text);
    let mst = minimum_spanning_tree(&graph, "v0").unwrap();
    assert!(mst.total_weight <= skeleton_weight);
}

#[test]
fn test_params_from_config_toml() {
    let config = GraphConfig::from_toml_str("[prim]\nroot = \"B\"\nunweighted_cost = 2.5\n").unwrap();
    let graph = fixtures::load_fixture(fixtures::UNWEIGHTED_TRIANGLE);

    let mst = prim_mst(&graph, &PrimParams::from_config(&config.prim)).unwrap();
    assert_eq!(mst.root, "B");
    assert_eq!(mst.total_weight, 5.0);
}

#[test]
fn test_cancel_from_another_thread() {
    let graph = fixtures::load_fixture(&fixtures::connected_edge_list(500, 1_000, 5));
    let token = CancelToken::new();
    let remote = token.clone();

    std::thread::spawn(move || remote.cancel())
        .join()
        .expect("cancel thread panicked");

    let params = PrimParams::new("v0").cancel(token);
    assert!(matches!(prim_mst(&graph, &params), Err(GraphError::Cancelled)));
}

#[test]
fn test_json_output() {
    let graph = fixtures::load_fixture(fixtures::WEIGHTED_TRIANGLE);
    let json = minimum_spanning_tree(&graph, "A").unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["root"], "A");
    assert_eq!(value["edges"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["order"][2], "B");
}
