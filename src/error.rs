//! Error types for `QuickLaunch`
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the log file
//! carries the full cause while the status line shows a one-line summary.

use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `QuickLaunch`
#[derive(Debug, Error)]
pub enum QuickLaunchError {
    /// Configuration error (data directory, paths, logging setup)
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Clipboard could not be read or written
    /// Preserves the underlying error source for full error chain transparency
    #[error("Clipboard error: {0}")]
    ClipboardError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Import payload is not valid JSON
    #[error("Import payload could not be parsed: {0}")]
    ImportUnparseable(#[source] serde_json::Error),

    /// Import payload is valid JSON but not a list
    #[error("Import payload is not a list (found {0})")]
    ImportNotAList(String),

    /// A single element of an import payload has the wrong shape
    #[error("Invalid launch record at position {index}: {reason}")]
    InvalidRecord {
        /// Zero-based position of the element in the imported list
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Background image could not be decoded
    #[error("Failed to load background image {path}: {source}")]
    BackgroundImageError {
        /// Path of the image that failed to load
        path: PathBuf,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias for `QuickLaunch` operations
pub type Result<T> = std::result::Result<T, QuickLaunchError>;

/// Convert an error to a user-friendly message
///
/// The status line has room for a single line, so every message is kept to
/// one sentence and carries the detail the user needs to act on it.
pub fn get_user_friendly_error(error: &QuickLaunchError) -> String {
    match error {
        QuickLaunchError::ConfigError(e) => format!("Configuration problem: {e}"),
        QuickLaunchError::IoError(e) => format!("Could not save button list: {e}"),
        QuickLaunchError::JsonError(e) => format!("Button list is corrupted: {e}"),
        QuickLaunchError::ClipboardError(e) => format!("Clipboard unavailable: {e}"),
        QuickLaunchError::ImportUnparseable(_) => {
            "Clipboard content could not be parsed".to_string()
        }
        QuickLaunchError::ImportNotAList(_) => "Clipboard content is invalid".to_string(),
        QuickLaunchError::InvalidRecord { index, reason } => {
            format!("Clipboard content is invalid: entry {} {reason}", index + 1)
        }
        QuickLaunchError::BackgroundImageError { source, .. } => {
            format!("Failed to load background image: {source}")
        }
    }
}
