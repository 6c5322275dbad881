//! Core data types for RAKE keyword extraction

use serde::{Deserialize, Serialize};

use crate::error::{RakeError, Result};

/// Default minimum character length of an acceptable candidate phrase
pub const DEFAULT_MIN_CHAR_LENGTH: usize = 3;

/// Default maximum number of words in an acceptable candidate phrase
pub const DEFAULT_MAX_WORDS_LENGTH: usize = 5;

/// Default minimum number of verbatim occurrences before a phrase is scored
pub const DEFAULT_MIN_KEYWORD_FREQUENCY: usize = 1;

fn default_min_char_length() -> usize {
    DEFAULT_MIN_CHAR_LENGTH
}

fn default_max_words_length() -> usize {
    DEFAULT_MAX_WORDS_LENGTH
}

fn default_min_keyword_frequency() -> usize {
    DEFAULT_MIN_KEYWORD_FREQUENCY
}

/// Configuration for a RAKE extraction
///
/// All fields are optional in JSON; missing ones take their defaults.
///
/// ```json
/// { "min_char_length": 3, "max_words_length": 5, "min_keyword_frequency": 1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RakeConfig {
    /// Minimum phrase length in characters
    #[serde(default = "default_min_char_length")]
    pub min_char_length: usize,
    /// Maximum phrase length in words
    #[serde(default = "default_max_words_length")]
    pub max_words_length: usize,
    /// Minimum verbatim occurrences of a phrase before it receives a score
    #[serde(default = "default_min_keyword_frequency")]
    pub min_keyword_frequency: usize,
}

impl Default for RakeConfig {
    fn default() -> Self {
        Self {
            min_char_length: DEFAULT_MIN_CHAR_LENGTH,
            max_words_length: DEFAULT_MAX_WORDS_LENGTH,
            min_keyword_frequency: DEFAULT_MIN_KEYWORD_FREQUENCY,
        }
    }
}

impl RakeConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum phrase length in characters
    pub fn with_min_char_length(mut self, min_char_length: usize) -> Self {
        self.min_char_length = min_char_length;
        self
    }

    /// Set the maximum phrase length in words
    pub fn with_max_words_length(mut self, max_words_length: usize) -> Self {
        self.max_words_length = max_words_length;
        self
    }

    /// Set the minimum keyword frequency
    pub fn with_min_keyword_frequency(mut self, min_keyword_frequency: usize) -> Self {
        self.min_keyword_frequency = min_keyword_frequency;
        self
    }

    /// Check that the settings can produce a result at all
    pub fn validate(&self) -> Result<()> {
        if self.max_words_length == 0 {
            return Err(RakeError::InvalidConfig(
                "max_words_length must be at least 1".into(),
            ));
        }
        if self.min_keyword_frequency == 0 {
            return Err(RakeError::InvalidConfig(
                "min_keyword_frequency must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// A ranked keyword phrase with its RAKE score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedKeyword {
    /// Lower-cased candidate phrase text
    pub phrase: String,
    /// Sum of the member word scores
    pub score: f64,
}

impl RankedKeyword {
    pub fn new(phrase: impl Into<String>, score: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }
}
