//! Test support utilities shared by the scorekeeper integration tests.
//!
//! Unique ids keep parallel tests from colliding; `logging` installs an
//! idempotent test subscriber.

pub mod logging;

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let id1 = unique_str("game");
/// let id2 = unique_str("game");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// The first `player_count` names of a fixed roster.
///
/// ```
/// use test_support::roster;
///
/// assert_eq!(roster(3), vec!["Anna", "Juris", "Līga"]);
/// ```
pub fn roster(player_count: usize) -> Vec<String> {
    ["Anna", "Juris", "Līga", "Pēteris"]
        .iter()
        .take(player_count)
        .map(|s| s.to_string())
        .collect()
}

/// Roster with a unique suffix on every name, for search tests that must
/// not match games saved by other tests.
pub fn unique_roster(player_count: usize) -> Vec<String> {
    roster(player_count)
        .into_iter()
        .map(|name| unique_str(&name))
        .collect()
}
