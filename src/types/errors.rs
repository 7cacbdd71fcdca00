//! Error types for pairvote.

use thiserror::Error;

/// Default result type for pairvote.
pub type PairVoteResult<T> = Result<T, PairVoteError>;

/// Errors that can occur in pairvote.
#[derive(Error, Debug)]
pub enum PairVoteError {
    #[error("Not enough entries to form a pair: {count} left")]
    NotEnoughEntries { count: usize },

    #[error("Voting is already decided: '{winner}' won")]
    AlreadyDecided { winner: String },

    #[error("Invalid voting state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cli")]
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl PairVoteError {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an invalid state error.
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        Self::InvalidState(msg.into())
    }
}
