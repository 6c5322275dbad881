//! Stop-word sources
//!
//! RAKE uses stop words only as phrase boundaries. This module produces the
//! ordered list the pattern builder consumes: from raw text (one word per
//! line), from a file, from a slice, or from the built-in lists shipped with
//! the `stop-words` crate.

use std::fs;
use std::path::Path;

use stop_words::{get, LANGUAGE};

use crate::error::{RakeError, Result};

/// An ordered list of stop words
///
/// Source order is preserved so the compiled pattern is reproducible. Entries
/// are kept as loaded; blank lines are skipped later by the pattern builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordList {
    words: Vec<String>,
}

impl StopwordList {
    /// Create an empty list (no stop-word filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a list from a slice of words
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Parse a list with one word per line
    pub fn from_text(contents: &str) -> Self {
        Self {
            words: contents.split('\n').map(|line| line.to_string()).collect(),
        }
    }

    /// Read a UTF-8 stop-word file with one word per line
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| RakeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_text(&contents);

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), entries = list.len(), "loaded stop words");

        Ok(list)
    }

    /// Built-in stop words for a language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi,
    /// hu, tr, pl. Unknown codes fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            _ => LANGUAGE::English,
        };

        Self {
            words: get(lang).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append more stop words, keeping order
    pub fn extend(&mut self, words: &[&str]) {
        self.words.extend(words.iter().map(|w| w.to_string()));
    }

    /// The words in source order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in source order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of entries, blank ones included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for StopwordList {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}
