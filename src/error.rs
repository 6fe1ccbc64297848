//! Error types for the simulation engine and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::LocationId;

/// Errors for engine calls that cannot be resolved against the current session.
///
/// Running out of energy is not one of these: a rejected action is a normal
/// [`ActionOutcome`](crate::game::ActionOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No game has been started yet.
    #[error("no active game: start a new game first")]
    NoActiveGame,
    /// The location id does not exist in the registry.
    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),
    /// The location exists but has no action at this index.
    #[error("location {location} has no action at index {index}")]
    UnknownAction {
        /// Location that was asked.
        location: LocationId,
        /// Requested action index.
        index: usize,
    },
}

/// Errors raised while loading or validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config parsed but holds values the game cannot run with.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for engine calls.
pub type SessionResult<T> = Result<T, SessionError>;
