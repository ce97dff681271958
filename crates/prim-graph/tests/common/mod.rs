//! Shared test utilities for integration tests.
//!
//! - `fixtures`: edge-list texts and deterministic graph generators
//! - `helpers`: temp-file and assertion helpers

pub mod fixtures;
