//! Word tokenization for scoring
//!
//! Splits a candidate phrase into content words. Any character outside
//! `[A-Za-z0-9_+\-/]` separates words. Tokens containing a digit are
//! treated as numbers: they stay in the phrase text but never become words.

/// Check whether `c` can be part of a word
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '/')
}

/// Split `text` into lower-cased words longer than `min_word_return_size`
///
/// Duplicates are kept; every occurrence counts during scoring.
pub fn separate_words(text: &str, min_word_return_size: usize) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .map(|w| w.trim().to_lowercase())
        .filter(|w| {
            w.len() > min_word_return_size
                && !w.is_empty()
                && !w.chars().any(|c| c.is_ascii_digit())
        })
        .collect()
}
