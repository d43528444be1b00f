//! Centralized error types for outboxShell.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the outboxShell library.
#[derive(Error, Debug)]
pub enum OutboxError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The attachment file does not exist.
    #[error("Attachment file not found: {0}")]
    AttachmentNotFound(PathBuf),

    /// The path points at something that is not a regular file.
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    /// An invalid path was provided.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Convenience alias for `Result<T, OutboxError>`.
pub type Result<T> = std::result::Result<T, OutboxError>;

impl OutboxError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Allow `?` on `std::io::Error` inside functions returning `OutboxError`
/// when no path context is available (rare — prefer `OutboxError::io`).
impl From<std::io::Error> for OutboxError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<unknown>"),
            source,
        }
    }
}
