//! Domain layer: pure scorekeeping types and helpers.

pub mod game_type;
pub mod reducer;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod setup;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_reducer;
#[cfg(test)]
mod tests_round;

// Re-exports for ergonomics
pub use game_type::{Bid, GameType, Pass, Resolution, RoundOutcome, SoloGrade};
pub use reducer::{apply, replay, Action};
pub use scoring::{apply_outcome, points_for, replay_totals, round_deltas, ScoredRound};
pub use setup::{placeholder_names, SetupProgress};
pub use snapshot::{score_sheet, table_snapshot, ScoreSheet, TableSnapshot};
pub use state::{current_dealer, expected_actor, hand_position, RoundPhase, Seat, SessionState};
