//! Error types for Handbasket.
//!
//! Uses `thiserror` for ergonomic error definition.

use std::io;

use thiserror::Error;

use crate::room_id::RoomId;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Handbasket operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid direction error.
    #[must_use]
    pub fn invalid_direction(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDirection(text.into()))
    }

    /// Creates an unknown command error carrying the player's original text.
    #[must_use]
    pub fn unknown_command(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(text.into()))
    }

    /// Creates a room not found error.
    #[must_use]
    pub fn room_not_found(id: RoomId) -> Self {
        Self::new(ErrorKind::RoomNotFound(id))
    }

    /// Creates an alias conflict error.
    #[must_use]
    pub fn alias_conflict(alias: impl Into<String>, existing: impl Into<String>) -> Self {
        Self::new(ErrorKind::AliasConflict {
            alias: alias.into(),
            existing: existing.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if the player can recover from this error by typing
    /// another command.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownCommand(_))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A world definition used a direction no alias resolves to.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// Player input matched no command or direction.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A room id that the world does not contain.
    #[error("room not found: {0:?}")]
    RoomNotFound(RoomId),

    /// An alias was registered for two different directions.
    #[error("alias {alias:?} already names {existing}")]
    AliasConflict {
        /// The alias being registered.
        alias: String,
        /// The canonical direction the alias already resolves to.
        existing: String,
    },

    /// The process-wide direction registry was already installed.
    #[error("direction registry already installed")]
    RegistryAlreadyInstalled,

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
