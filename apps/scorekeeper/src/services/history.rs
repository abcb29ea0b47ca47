//! Search and filtering over saved games.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::repos::saved_games::SavedGame;

/// Recency window for the history list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    #[default]
    All,
    /// Same UTC calendar date as now.
    Today,
    /// Within the last 7 days.
    Week,
    /// Within the last 30 days.
    Month,
}

impl DateFilter {
    pub fn matches(&self, date: OffsetDateTime, now: OffsetDateTime) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Today => date.to_offset(UtcOffset::UTC).date() == now.to_offset(UtcOffset::UTC).date(),
            DateFilter::Week => date >= now - Duration::days(7),
            DateFilter::Month => date >= now - Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    /// Matches any player name or the game id.
    pub search: String,
    /// Matches any player name.
    pub player: String,
    pub date: DateFilter,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl GameFilter {
    pub fn matches(&self, game: &SavedGame, now: OffsetDateTime) -> bool {
        let search = self.search.trim().to_lowercase();
        let matches_search = search.is_empty()
            || game.state.players.iter().any(|p| contains_ci(p, &search))
            || contains_ci(&game.meta.id, &search);

        let player = self.player.trim().to_lowercase();
        let matches_player =
            player.is_empty() || game.state.players.iter().any(|p| contains_ci(p, &player));

        matches_search && matches_player && self.date.matches(game.meta.date, now)
    }
}

/// Keep the games matching `filter`, preserving order.
pub fn filter(games: Vec<SavedGame>, filter: &GameFilter, now: OffsetDateTime) -> Vec<SavedGame> {
    games
        .into_iter()
        .filter(|game| filter.matches(game, now))
        .collect()
}
