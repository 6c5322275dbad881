//! Stop-word pattern
//!
//! Compiles an ordered stop-word list into a single case-insensitive
//! alternation of word-boundary anchored words
//! (`(?-u:\b)the(?-u:\b)|(?-u:\b)of(?-u:\b)|...`).
//! The matcher is built once and threaded through the pipeline by reference.
//!
//! Word boundaries are ASCII-only, matching the word tokenizer: a non-ASCII
//! letter is a boundary, so `ve` matches inside `naïve`.

use regex::{Regex, RegexBuilder};

use super::stopwords::StopwordList;
use crate::error::Result;

/// ASCII word boundary; stop words themselves may still be non-ASCII
const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// Compiled-size ceiling for large stop lists
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Immutable matcher recognizing any stop word as a whole token
///
/// An empty effective word list yields a matcher that never matches.
#[derive(Debug, Clone, Default)]
pub struct StopwordMatcher {
    pattern: Option<Regex>,
    alternatives: usize,
}

impl StopwordMatcher {
    /// A matcher that matches nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a matcher from words in order
    ///
    /// Entries are trimmed; entries without any word character are skipped
    /// so a blank line can never turn into a bare boundary-only alternative.
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let alternatives: Vec<String> = words
            .into_iter()
            .map(str::trim)
            .filter(|w| w.chars().any(|c| c.is_alphanumeric() || c == '_'))
            .map(|w| format!("{WORD_BOUNDARY}{}{WORD_BOUNDARY}", regex::escape(w)))
            .collect();

        if alternatives.is_empty() {
            return Ok(Self::empty());
        }

        let pattern = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
            alternatives: alternatives.len(),
        })
    }

    /// Build a matcher from a loaded stop-word list
    pub fn from_list(list: &StopwordList) -> Result<Self> {
        Self::new(list.iter())
    }

    /// Textual form of the alternation (empty when nothing can match)
    pub fn as_str(&self) -> &str {
        self.pattern.as_ref().map_or("", Regex::as_str)
    }

    /// Check whether any stop word occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Split `text` on every stop-word occurrence
    ///
    /// Returns the fragments between matches in order, including empty ones.
    /// With no pattern the whole text is the single fragment.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match &self.pattern {
            Some(re) => re.split(text).collect(),
            None => vec![text],
        }
    }

    /// Number of stop words in the alternation
    pub fn len(&self) -> usize {
        self.alternatives
    }

    /// Check if the matcher can never match
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }
}
