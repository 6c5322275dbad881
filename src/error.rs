//! Error types
//!
//! The extraction core itself cannot fail on any text input; errors only come
//! from the collaborators around it (loading stop words, compiling the
//! stop-word pattern, parsing configuration).

use std::path::PathBuf;

/// Errors produced while preparing a keyword extraction
#[derive(thiserror::Error, Debug)]
pub enum RakeError {
    /// A stop-word file could not be read
    #[error("failed to read stop words from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stop-word alternation could not be compiled
    #[error("failed to compile stop-word pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration values rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RakeError>;
