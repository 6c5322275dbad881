//! Candidate phrase extraction
//!
//! Within each sentence, stop words act as phrase boundaries. Every run of
//! text between two stop words is trimmed, lower-cased, and kept if it passes
//! [`is_acceptable`].

use super::filter::is_acceptable;
use crate::nlp::pattern::StopwordMatcher;
use crate::types::{DEFAULT_MAX_WORDS_LENGTH, DEFAULT_MIN_CHAR_LENGTH};

/// Configuration for candidate extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Minimum phrase length in characters
    pub min_char_length: usize,
    /// Maximum phrase length in words
    pub max_words_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_char_length: 1,
            max_words_length: DEFAULT_MAX_WORDS_LENGTH,
        }
    }
}

/// Candidate phrase extractor
#[derive(Debug, Clone, Default)]
pub struct CandidateExtractor {
    config: ExtractorConfig,
}

impl CandidateExtractor {
    /// Create an extractor with the raw defaults (min 1 char, max 5 words)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with the pipeline defaults (min 3 chars, max 5 words)
    pub fn pipeline_default() -> Self {
        Self::new().with_min_char_length(DEFAULT_MIN_CHAR_LENGTH)
    }

    /// Create an extractor with custom config
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Set minimum phrase length in characters
    pub fn with_min_char_length(mut self, min_char_length: usize) -> Self {
        self.config.min_char_length = min_char_length;
        self
    }

    /// Set maximum phrase length in words
    pub fn with_max_words_length(mut self, max_words_length: usize) -> Self {
        self.config.max_words_length = max_words_length;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract candidate phrases from sentences, in encounter order
    ///
    /// Duplicates are kept; they are aggregated during scoring.
    pub fn extract<S: AsRef<str>>(
        &self,
        sentences: &[S],
        matcher: &StopwordMatcher,
    ) -> Vec<String> {
        let mut phrases = Vec::new();
        for sentence in sentences {
            self.extract_from_sentence(sentence.as_ref(), matcher, &mut phrases);
        }
        phrases
    }

    /// Extract phrases from a single sentence
    fn extract_from_sentence(
        &self,
        sentence: &str,
        matcher: &StopwordMatcher,
        phrases: &mut Vec<String>,
    ) {
        for fragment in matcher.split(sentence) {
            let phrase = fragment.trim().to_lowercase();
            if !phrase.is_empty()
                && is_acceptable(
                    &phrase,
                    self.config.min_char_length,
                    self.config.max_words_length,
                )
            {
                phrases.push(phrase);
            }
        }
    }
}
