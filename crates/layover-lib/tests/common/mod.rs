//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use layover_lib::{load_graph, AirportGraph, DatasetPaths};

/// Directory holding the JSON fixture dataset.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_paths() -> DatasetPaths {
    DatasetPaths::in_dir(&fixtures_dir())
}

#[allow(dead_code)]
pub fn fixture_graph() -> AirportGraph {
    load_graph(&fixture_paths()).expect("fixture dataset loads")
}
