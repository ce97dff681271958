//! Tests for the graph model.
