//! Error handling and types

use std::path::PathBuf;
use thiserror::Error;

/// Locale synchronization errors
#[derive(Error, Debug)]
pub enum SyncError {
    /// Standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference locale file is absent; the run cannot proceed without it
    #[error("Reference file missing: {}", .0.display())]
    MissingReference(PathBuf),

    /// Target locale file does not exist (recoverable, file is skipped)
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File content is not a valid JSON object
    #[error("Malformed JSON in {}: {source}", path.display())]
    MalformedInput {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an object
    #[error("Expected a top-level JSON object in {}", .0.display())]
    NotAnObject(PathBuf),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
