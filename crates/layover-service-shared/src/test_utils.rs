//! Fixtures for handler tests.

use std::path::PathBuf;
use std::sync::OnceLock;

use layover_lib::Settings;

use crate::state::AppState;

/// Directory holding the JSON fixture dataset.
pub const TEST_FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../docs/fixtures");

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared test state loaded once from the fixture dataset with default settings.
///
/// # Panics
///
/// Panics if the fixture dataset cannot be loaded.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let dir = fixture_dir();
            AppState::load(Some(&dir), Settings::default())
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", dir, e))
        })
        .clone()
}

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_DIR)
}

/// Airport codes present in the fixture dataset.
pub mod fixture_airports {
    pub const TALLINN: &str = "TLL";
    pub const RIGA: &str = "RIX";
    pub const VILNIUS: &str = "VNO";
    pub const FRANKFURT: &str = "FRA";
    /// Present but without connections.
    pub const KEFLAVIK: &str = "KEF";
}
