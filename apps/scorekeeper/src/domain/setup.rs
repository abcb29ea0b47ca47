//! Game setup: roster and initial dealer validation, and the stepwise
//! setup flow (player count, then names, then dealer).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::reducer::{apply, Action};
use crate::domain::rules::{is_valid_player_count, PLAYER_COUNTS};
use crate::domain::state::{Seat, SessionState};
use crate::errors::domain::{ConfigurationKind, DomainError};

/// Roster must have 3 or 4 unique, non-blank names.
pub fn validate_roster(names: &[String]) -> Result<(), DomainError> {
    if !is_valid_player_count(names.len()) {
        return Err(DomainError::configuration(
            ConfigurationKind::PlayerCount,
            format!(
                "expected {}..={} players, got {}",
                PLAYER_COUNTS.start(),
                PLAYER_COUNTS.end(),
                names.len()
            ),
        ));
    }
    let mut seen = HashSet::with_capacity(names.len());
    for (seat, name) in names.iter().enumerate() {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::configuration(
                ConfigurationKind::EmptyName,
                format!("player name for seat {seat} is empty"),
            ));
        }
        if !seen.insert(trimmed) {
            return Err(DomainError::configuration(
                ConfigurationKind::DuplicateName,
                format!("player name {trimmed:?} is used more than once"),
            ));
        }
    }
    Ok(())
}

pub fn validate_dealer(dealer: Seat, player_count: u8) -> Result<(), DomainError> {
    if dealer < player_count {
        Ok(())
    } else {
        Err(DomainError::configuration(
            ConfigurationKind::DealerOutOfRange,
            format!("dealer seat {dealer} is outside 0..{player_count}"),
        ))
    }
}

/// Default names offered for an `n`-player table: "Player 1", "Player 2", ...
pub fn placeholder_names(player_count: u8) -> Vec<String> {
    (1..=player_count).map(|i| format!("Player {i}")).collect()
}

/// Setup progress as carried between setup steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum SetupProgress {
    PlayerCount {
        player_count: u8,
    },
    Names {
        player_count: u8,
        names: Vec<String>,
    },
    Complete {
        player_count: u8,
        names: Vec<String>,
        dealer: Seat,
    },
}

impl SetupProgress {
    pub fn start(player_count: u8) -> Result<Self, DomainError> {
        if !is_valid_player_count(usize::from(player_count)) {
            return Err(DomainError::configuration(
                ConfigurationKind::PlayerCount,
                format!("unsupported player count {player_count}"),
            ));
        }
        Ok(Self::PlayerCount { player_count })
    }

    pub fn player_count(&self) -> u8 {
        match self {
            Self::PlayerCount { player_count }
            | Self::Names { player_count, .. }
            | Self::Complete { player_count, .. } => *player_count,
        }
    }

    /// Supply names; blank entries fall back to their placeholder.
    pub fn with_names(self, names: Vec<String>) -> Result<Self, DomainError> {
        let player_count = self.player_count();
        if names.len() != usize::from(player_count) {
            return Err(DomainError::configuration(
                ConfigurationKind::PlayerCount,
                format!("expected {player_count} names, got {}", names.len()),
            ));
        }
        let names: Vec<String> = names
            .into_iter()
            .zip(placeholder_names(player_count))
            .map(|(name, placeholder)| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    placeholder
                } else {
                    trimmed.to_string()
                }
            })
            .collect();
        validate_roster(&names)?;
        Ok(Self::Names {
            player_count,
            names,
        })
    }

    pub fn with_dealer(self, dealer: Seat) -> Result<Self, DomainError> {
        match self {
            Self::Names {
                player_count,
                names,
            }
            | Self::Complete {
                player_count,
                names,
                ..
            } => {
                validate_dealer(dealer, player_count)?;
                Ok(Self::Complete {
                    player_count,
                    names,
                    dealer,
                })
            }
            Self::PlayerCount { .. } => Err(DomainError::configuration(
                ConfigurationKind::EmptyName,
                "names must be chosen before the dealer",
            )),
        }
    }

    /// Build the session by running the setup actions through the reducer.
    pub fn into_session(self) -> Result<SessionState, DomainError> {
        match self {
            Self::Complete { names, dealer, .. } => {
                let state = apply(&SessionState::default(), Action::SetupPlayers(names))?;
                apply(&state, Action::SelectInitialDealer(dealer))
            }
            _ => Err(DomainError::configuration(
                ConfigurationKind::DealerOutOfRange,
                "setup is not complete",
            )),
        }
    }
}
