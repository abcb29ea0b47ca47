//! Error codes for the scorekeeper.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! printed by the CLI and carried by `AppError::code()`.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round state machine
    /// Players or dealer not chosen yet
    NotSetUp,
    /// A game type is already declared
    AlreadyDeclared,
    /// Resolve attempted while bidding
    NotDeclared,
    /// Resolve payload does not match the declared game type
    OutcomeMismatch,
    /// Setup change after rounds were played
    SetupLocked,

    // Setup validation
    /// Player count outside 3..=4
    InvalidPlayerCount,
    /// Blank player name
    EmptyPlayerName,
    /// Same name used twice
    DuplicatePlayerName,
    /// Initial dealer outside the roster
    InvalidDealer,
    /// Seat index outside the roster
    InvalidSeat,
    /// Decoded state failed validation
    CorruptState,

    // Collaborators
    /// Saved game not found
    GameNotFound,
    /// Share token could not be encoded or decoded
    InvalidToken,
    /// Filesystem failure
    IoError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotSetUp => "NOT_SET_UP",
            Self::AlreadyDeclared => "ALREADY_DECLARED",
            Self::NotDeclared => "NOT_DECLARED",
            Self::OutcomeMismatch => "OUTCOME_MISMATCH",
            Self::SetupLocked => "SETUP_LOCKED",

            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::EmptyPlayerName => "EMPTY_PLAYER_NAME",
            Self::DuplicatePlayerName => "DUPLICATE_PLAYER_NAME",
            Self::InvalidDealer => "INVALID_DEALER",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::CorruptState => "CORRUPT_STATE",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::IoError => "IO_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
