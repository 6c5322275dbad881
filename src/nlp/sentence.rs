//! Sentence and clause splitting
//!
//! A flat split on punctuation and structural characters. Fragments are
//! returned untouched, empty ones included; downstream stages drop them.

/// Characters that end a sentence or clause
const SENTENCE_DELIMITERS: &[char] = &[
    '[', ']', '\n', '.', '!', '?', ',', ';', ':', '\t', '-', '\\', '(', ')', '"', '\'',
    '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2013}',
];

/// Check whether `c` separates sentences
#[inline]
pub fn is_sentence_delimiter(c: char) -> bool {
    SENTENCE_DELIMITERS.contains(&c)
}

/// Split raw text into sentence fragments
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_sentence_delimiter).collect()
}
