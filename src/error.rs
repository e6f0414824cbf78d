//! Error types.
//!
//! Only two things can go wrong inside the engine, and both mean the configured
//! tables are inconsistent with the board. Mistimed calls and illegal moves are
//! reported as statuses, not errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A level number outside the catalog was requested.
    #[error("level {level} is out of range (catalog defines levels 1..={max})")]
    OutOfRange { level: u32, max: u32 },

    /// More queens were requested than there are free squares.
    #[error("cannot place {requested} queens: only {available} free squares")]
    CapacityExceeded { requested: u32, available: u32 },
}

/// Errors raised while loading or validating a [`crate::config::GameConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            reason: reason.into(),
        }
    }
}

pub type GameResult<T> = Result<T, GameError>;
