#![cfg(test)]

//! Test logging initialization for unit tests.
//!
//! Idempotent: the first call installs a test-writer subscriber and later
//! calls are no-ops.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize logging for tests.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
///
/// ```bash
/// TEST_LOG=debug cargo test -p scorekeeper
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
