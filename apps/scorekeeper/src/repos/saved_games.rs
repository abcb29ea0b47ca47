//! Saved-game repository backed by a directory of share tokens.
//!
//! Each game lives in `<dir>/game-<id>`, where the file body is the share
//! token of the session state plus its metadata.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, warn};
use ulid::Ulid;

use crate::domain::SessionState;
use crate::error::AppError;
use crate::protocol::share_token;

const FILE_PREFIX: &str = "game-";

/// Identity and last-save time of a saved game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMeta {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// Saved game domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub meta: GameMeta,
    pub state: SessionState,
}

impl SavedGame {
    /// New game with a fresh ULID, stamped now.
    pub fn new(state: SessionState) -> Self {
        Self {
            meta: GameMeta {
                id: Ulid::new().to_string(),
                date: OffsetDateTime::now_utc(),
            },
            state,
        }
    }
}

/// Summary shown in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGameSummary {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub players: Vec<String>,
    pub rounds_played: usize,
    pub totals: Vec<i32>,
}

impl From<&SavedGame> for SavedGameSummary {
    fn from(game: &SavedGame) -> Self {
        Self {
            id: game.meta.id.clone(),
            date: game.meta.date,
            players: game.state.players.clone(),
            rounds_played: game.state.rounds_played(),
            totals: game.state.totals(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SavedGameStore {
    dir: PathBuf,
}

impl SavedGameStore {
    /// Open (and create if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, AppError> {
        Ulid::from_string(id).map_err(|_| AppError::not_found(format!("game {id}")))?;
        Ok(self.dir.join(format!("{FILE_PREFIX}{id}")))
    }

    /// Write the game, replacing any previous save with the same id.
    pub fn save(&self, game: &SavedGame) -> Result<(), AppError> {
        let path = self.path_for(&game.meta.id)?;
        let token = share_token::encode(game)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, token)?;
        fs::rename(&tmp, &path)?;
        debug!(id = %game.meta.id, rounds = game.state.rounds_played(), "Saved game");
        Ok(())
    }

    pub fn load(&self, id: &str) -> Result<SavedGame, AppError> {
        let path = self.path_for(id)?;
        let token = match fs::read_to_string(&path) {
            Ok(token) => token,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::not_found(format!("game {id}")))
            }
            Err(e) => return Err(e.into()),
        };
        let game: SavedGame = share_token::decode(&token)?;
        game.state.validate()?;
        Ok(game)
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::not_found(format!("game {id}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All readable saved games, newest first. Unreadable files are skipped.
    pub fn list(&self) -> Result<Vec<SavedGame>, AppError> {
        let mut games = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(id) = name.to_str().and_then(|n| n.strip_prefix(FILE_PREFIX)) else {
                continue;
            };
            if id.ends_with(".tmp") {
                continue;
            }
            match self.load(id) {
                Ok(game) => games.push(game),
                Err(e) => warn!(file = ?entry.path(), error = %e, "Failed to parse saved game"),
            }
        }
        games.sort_by(|a, b| b.meta.date.cmp(&a.meta.date));
        Ok(games)
    }
}
