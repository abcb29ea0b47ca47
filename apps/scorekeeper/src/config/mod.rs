//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

pub const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";
pub const HISTORY_LIMIT_VAR: &str = "SCOREKEEPER_HISTORY_LIMIT";
const DEFAULT_DATA_DIR: &str = "./saved-games";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding saved games
    pub data_dir: PathBuf,
    /// Maximum number of games the history list returns
    pub history_limit: Option<usize>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(dir) if dir.trim().is_empty() => {
                return Err(AppError::config(format!(
                    "Environment variable '{DATA_DIR_VAR}' must not be empty"
                )))
            }
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_DATA_DIR),
        };

        let history_limit = lookup(HISTORY_LIMIT_VAR)
            .map(|raw| parse_limit(&raw))
            .transpose()?;

        Ok(Self {
            data_dir,
            history_limit,
        })
    }

    /// Replace the data directory (CLI override).
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

fn parse_limit(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(AppError::config(format!(
            "'{HISTORY_LIMIT_VAR}' must be a positive integer, got '{raw}'"
        ))),
    }
}
