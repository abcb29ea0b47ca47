use thiserror::Error;

use crate::errors::domain::{ConfigurationKind, DomainError, TransitionKind};
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Invalid token: {detail}")]
    Token { detail: String },
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => domain_code(err),
            AppError::NotFound { .. } => ErrorCode::GameNotFound,
            AppError::Token { .. } => ErrorCode::InvalidToken,
            AppError::Io { .. } => ErrorCode::IoError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn token(detail: impl Into<String>) -> Self {
        Self::Token {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

fn domain_code(err: &DomainError) -> ErrorCode {
    match err {
        DomainError::InvalidTransition(kind, _) => match kind {
            TransitionKind::NotSetUp => ErrorCode::NotSetUp,
            TransitionKind::AlreadyDeclared => ErrorCode::AlreadyDeclared,
            TransitionKind::NotDeclared => ErrorCode::NotDeclared,
            TransitionKind::OutcomeMismatch => ErrorCode::OutcomeMismatch,
            TransitionKind::SetupLocked => ErrorCode::SetupLocked,
        },
        DomainError::InvalidConfiguration(kind, _) => match kind {
            ConfigurationKind::PlayerCount => ErrorCode::InvalidPlayerCount,
            ConfigurationKind::EmptyName => ErrorCode::EmptyPlayerName,
            ConfigurationKind::DuplicateName => ErrorCode::DuplicatePlayerName,
            ConfigurationKind::DealerOutOfRange => ErrorCode::InvalidDealer,
            ConfigurationKind::CorruptState => ErrorCode::CorruptState,
        },
        DomainError::OutOfRangeSeat { .. } => ErrorCode::InvalidSeat,
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io {
            detail: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::token(e.to_string())
    }
}
