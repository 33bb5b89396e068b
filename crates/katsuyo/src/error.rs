//! Error types for the Katsuyo library.

use std::path::PathBuf;
use thiserror::Error;

use crate::classify::ConjugationClass;

/// Main error type for Katsuyo operations.
#[derive(Debug, Error)]
pub enum KatsuyoError {
    /// The dictionary form cannot be stemmed the way its class requires.
    #[error("Malformed input '{word}' for {class}: {reason}")]
    MalformedInput {
        word: String,
        class: ConjugationClass,
        reason: String,
    },

    /// A store write failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Error from the SQLite driver.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The category catalog could not be fully initialized.
    #[error("Category catalog incomplete, missing: {}", missing.join(", "))]
    CatalogIncomplete { missing: Vec<String> },

    /// A category code that is not part of the catalog.
    #[error("Unknown category code: {0}")]
    UnknownCategory(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a vocabulary file.
    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no entries to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KatsuyoError {
    pub(crate) fn malformed(
        word: &str,
        class: ConjugationClass,
        reason: impl Into<String>,
    ) -> Self {
        KatsuyoError::MalformedInput {
            word: word.to_string(),
            class,
            reason: reason.into(),
        }
    }

    /// Returns true if retrying the same input can succeed.
    ///
    /// Malformed input is deterministic; storage failures are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            KatsuyoError::Persistence(_) | KatsuyoError::Database(_) | KatsuyoError::Io { .. }
        )
    }
}

/// Result type alias for Katsuyo operations.
pub type Result<T> = std::result::Result<T, KatsuyoError>;
