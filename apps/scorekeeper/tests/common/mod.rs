#![allow(dead_code)]

// tests/common/mod.rs
use scorekeeper::{GameSessionService, SavedGameStore};
use tempfile::TempDir;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    test_support::logging::init();
}

/// Service over a fresh temporary store. Keep the `TempDir` alive for the
/// duration of the test.
pub fn temp_service(history_limit: Option<usize>) -> (TempDir, GameSessionService) {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let store = SavedGameStore::open(dir.path()).expect("store should open");
    (dir, GameSessionService::new(store, history_limit))
}
