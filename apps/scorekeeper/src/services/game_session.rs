//! Applying actions to saved games.

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::domain::{apply, Action, Seat, SetupProgress};
use crate::error::AppError;
use crate::errors::domain::{ConfigurationKind, DomainError};
use crate::protocol::share_token;
use crate::repos::saved_games::{SavedGame, SavedGameStore, SavedGameSummary};
use crate::services::history::{self, GameFilter};

/// Saved-game session service.
#[derive(Debug, Clone)]
pub struct GameSessionService {
    store: SavedGameStore,
    history_limit: Option<usize>,
}

impl GameSessionService {
    pub fn new(store: SavedGameStore, history_limit: Option<usize>) -> Self {
        Self {
            store,
            history_limit,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let store = SavedGameStore::open(&config.data_dir)?;
        Ok(Self::new(store, config.history_limit))
    }

    pub fn store(&self) -> &SavedGameStore {
        &self.store
    }

    /// Create and save a new game. Blank names become placeholders.
    pub fn start(&self, names: Vec<String>, dealer: Seat) -> Result<SavedGame, AppError> {
        let player_count = u8::try_from(names.len()).map_err(|_| {
            DomainError::configuration(
                ConfigurationKind::PlayerCount,
                format!("unsupported player count {}", names.len()),
            )
        })?;
        let state = SetupProgress::start(player_count)?
            .with_names(names)?
            .with_dealer(dealer)?
            .into_session()?;

        let game = SavedGame::new(state);
        self.store.save(&game)?;
        info!(id = %game.meta.id, player_count, dealer, "Created game");
        Ok(game)
    }

    pub fn load(&self, id: &str) -> Result<SavedGame, AppError> {
        self.store.load(id)
    }

    /// Apply one action and persist the result. A rejected action leaves the
    /// saved game untouched.
    pub fn apply(&self, id: &str, action: Action) -> Result<SavedGame, AppError> {
        debug!(id, action = ?action, "Applying action");
        let mut game = self.store.load(id)?;
        let next = apply(&game.state, action)?;

        if next.rounds_played() > game.state.rounds_played() {
            if let Some(round) = next.history.last() {
                info!(
                    id,
                    round_no = next.rounds_played(),
                    outcome = round.outcome.label(),
                    totals = ?round.totals,
                    "Round resolved"
                );
            }
        }

        game.state = next;
        game.meta.date = OffsetDateTime::now_utc();
        self.store.save(&game)?;
        Ok(game)
    }

    /// Share token for the game's current state.
    pub fn share(&self, id: &str) -> Result<String, AppError> {
        let game = self.store.load(id)?;
        share_token::encode(&game.state)
    }

    /// Validate a shared state and save it as a new game.
    pub fn import(&self, token: &str) -> Result<SavedGame, AppError> {
        let state = share_token::decode_session(token)?;
        let game = SavedGame::new(state);
        self.store.save(&game)?;
        info!(id = %game.meta.id, rounds = game.state.rounds_played(), "Imported game");
        Ok(game)
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store.delete(id)?;
        info!(id, "Deleted game");
        Ok(())
    }

    pub fn list(&self, filter: &GameFilter) -> Result<Vec<SavedGameSummary>, AppError> {
        self.list_at(filter, OffsetDateTime::now_utc())
    }

    /// History as seen at `now`, newest first and capped at the configured limit.
    pub fn list_at(
        &self,
        filter: &GameFilter,
        now: OffsetDateTime,
    ) -> Result<Vec<SavedGameSummary>, AppError> {
        let games = history::filter(self.store.list()?, filter, now);
        let limit = self.history_limit.unwrap_or(usize::MAX);
        debug!(matched = games.len(), ?limit, "Listing saved games");
        Ok(games.iter().take(limit).map(SavedGameSummary::from).collect())
    }
}
