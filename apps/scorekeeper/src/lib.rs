#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod repos;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::AppConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use repos::saved_games::{GameMeta, SavedGame, SavedGameStore, SavedGameSummary};
pub use services::{DateFilter, GameFilter, GameSessionService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
