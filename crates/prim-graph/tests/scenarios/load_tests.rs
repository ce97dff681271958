//! Loading graphs from text, readers and files.

use std::fs::File;
use std::io::{BufReader, Cursor};

use prim_graph::{load_reader, load_str, GraphError, GraphLoader, LoaderConfig};

use crate::common::{fixtures, helpers};

#[test]
fn test_load_weighted_triangle() {
    let graph = fixtures::load_fixture(fixtures::WEIGHTED_TRIANGLE);

    assert!(!graph.is_directional());
    assert!(graph.is_weighted());
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.total_weight(), 7.0);

    let labels: Vec<&str> = graph.nodes().map(|n| n.label()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
}

#[test]
fn test_load_from_temp_file() {
    let file = helpers::write_temp_graph(fixtures::WEIGHTED_TRIANGLE, ".gl");
    let reader = BufReader::new(File::open(file.path()).expect("open temp file"));

    let graph = load_reader(reader).expect("load from file");
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_reader_and_str_agree() {
    let text = fixtures::connected_edge_list(40, 60, 17);
    let from_str = load_str(&text).unwrap();
    let from_reader = load_reader(Cursor::new(text.as_bytes())).unwrap();

    assert_eq!(from_str.node_count(), from_reader.node_count());
    assert_eq!(from_str.edge_count(), from_reader.edge_count());
    assert_eq!(from_str.total_weight(), from_reader.total_weight());
}

#[test]
fn test_unweighted_line_with_weight_field_is_accepted() {
    let graph = load_str("undirected unweighted\nA=B=7\n").unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.total_weight(), 0.0);
}

#[test]
fn test_error_reports_line_number_and_content() {
    let err = load_str("undirected weighted\nA=B=1\n\nB=C=1\nA=B=C=1\n").unwrap_err();

    match &err {
        GraphError::Line { line, content, .. } => {
            assert_eq!(*line, 5);
            assert_eq!(content, "A=B=C=1");
        }
        other => panic!("expected Line error, got {:?}", other),
    }
    assert!(matches!(err.root_cause(), GraphError::Malformed(_)));
    assert!(err.to_string().contains("line 5"));
}

#[test]
fn test_missing_weight_on_weighted_graph() {
    let err = load_str("undirected weighted\nA=B\n").unwrap_err();
    assert!(matches!(
        err.root_cause(),
        GraphError::MissingWeight { .. }
    ));
}

#[test]
fn test_bad_header() {
    let err = load_str("sideways weighted\nA=B=1\n").unwrap_err();
    assert!(matches!(err.root_cause(), GraphError::InvalidHeader(_)));
}

#[test]
fn test_empty_input() {
    assert!(matches!(load_str(""), Err(GraphError::EmptyInput)));
    assert!(matches!(load_str("\n  \n\n"), Err(GraphError::EmptyInput)));
}

#[test]
fn test_strict_blank_lines() {
    let config = LoaderConfig {
        skip_blank_lines: false,
        ..LoaderConfig::default()
    };
    let err = GraphLoader::with_config(config)
        .load_lines(["undirected weighted", "A=B=1", "", "B=C=1"])
        .unwrap_err();

    assert!(matches!(err, GraphError::Line { line: 3, .. }));
    assert!(matches!(err.root_cause(), GraphError::Malformed(_)));
}

#[test]
fn test_large_generated_graph_loads() {
    let text = fixtures::connected_edge_list(2_000, 4_000, 3);
    let graph = load_str(&text).unwrap();
    assert_eq!(graph.node_count(), 2_000);
    assert!(graph.edge_count() >= 1_999);
}
