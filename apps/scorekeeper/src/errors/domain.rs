//! Domain-level error type used across services and adapters.
//!
//! This error type is storage- and CLI-agnostic. Services return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::state::Seat;

/// Why an action was incompatible with the current round state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionKind {
    /// Players or the initial dealer have not been chosen yet.
    NotSetUp,
    /// A game type is already declared for this round.
    AlreadyDeclared,
    /// Resolution attempted while the round is still bidding.
    NotDeclared,
    /// Resolution payload does not fit the declared game type.
    OutcomeMismatch,
    /// Roster or dealer changes after rounds have been played.
    SetupLocked,
}

/// Why setup input or a decoded state was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationKind {
    PlayerCount,
    EmptyName,
    DuplicateName,
    DealerOutOfRange,
    /// Structurally invalid state (e.g. decoded from a tampered token).
    CorruptState,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Action incompatible with the current round state
    InvalidTransition(TransitionKind, String),
    /// Malformed setup input
    InvalidConfiguration(ConfigurationKind, String),
    /// Seat index outside `[0, player_count)`
    OutOfRangeSeat { seat: Seat, player_count: u8 },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidTransition(kind, d) => write!(f, "invalid transition {kind:?}: {d}"),
            DomainError::InvalidConfiguration(kind, d) => {
                write!(f, "invalid configuration {kind:?}: {d}")
            }
            DomainError::OutOfRangeSeat { seat, player_count } => {
                write!(f, "seat {seat} out of range for {player_count} players")
            }
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn transition(kind: TransitionKind, detail: impl Into<String>) -> Self {
        Self::InvalidTransition(kind, detail.into())
    }
    pub fn configuration(kind: ConfigurationKind, detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration(kind, detail.into())
    }
    pub fn corrupt(detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration(ConfigurationKind::CorruptState, detail.into())
    }
    pub fn seat_out_of_range(seat: Seat, player_count: u8) -> Self {
        Self::OutOfRangeSeat { seat, player_count }
    }
}
