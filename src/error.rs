//! Error types for loading hint configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a [`HintConfig`](crate::HintConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The hint alphabet has no characters.
    #[error("hint alphabet is empty")]
    EmptyAlphabet,

    /// The same character appears twice (after case folding).
    #[error("hint alphabet repeats {0:?}")]
    DuplicateAlphabetChar(char),

    /// Whitespace and control characters cannot be typed as hints.
    #[error("hint alphabet contains untypeable character {0:?}")]
    InvalidAlphabetChar(char),

    /// Malformed JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading a configuration file.
    #[error("I/O error reading {path}: {error}")]
    Io {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        error: std::io::Error,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
