//! Candidate phrase scores
//!
//! A phrase scores the sum of its word scores. Phrases are identified by
//! exact text, so repeated occurrences collapse into a single entry.

use rustc_hash::FxHashMap;

use super::word::WordScores;
use crate::nlp::tokenizer::separate_words;
use crate::types::RankedKeyword;

/// Count verbatim occurrences of each phrase
pub fn count_occurrences<S: AsRef<str>>(phrases: &[S]) -> FxHashMap<&str, usize> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for phrase in phrases {
        *counts.entry(phrase.as_ref()).or_insert(0) += 1;
    }
    counts
}

/// Score of a single phrase; words without a score contribute nothing
pub fn phrase_score(phrase: &str, word_scores: &WordScores) -> f64 {
    separate_words(phrase, 0)
        .iter()
        .map(|word| word_scores.get(word).unwrap_or(0.0))
        .fold(0.0, |acc, score| acc + score)
}

/// Scores for distinct candidate phrases, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateScores {
    entries: Vec<RankedKeyword>,
    index: FxHashMap<String, usize>,
}

impl CandidateScores {
    /// Create an empty score table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score of a phrase, keeping its first-seen position
    pub fn insert(&mut self, phrase: &str, score: f64) {
        match self.index.get(phrase) {
            Some(&i) => self.entries[i].score = score,
            None => {
                self.index.insert(phrase.to_string(), self.entries.len());
                self.entries.push(RankedKeyword::new(phrase, score));
            }
        }
    }

    /// Score of a phrase
    pub fn get(&self, phrase: &str) -> Option<f64> {
        self.index.get(phrase).map(|&i| self.entries[i].score)
    }

    /// Check if a phrase was scored
    pub fn contains(&self, phrase: &str) -> bool {
        self.index.contains_key(phrase)
    }

    /// Iterate over entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &RankedKeyword> {
        self.entries.iter()
    }

    /// Number of distinct phrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no phrase was scored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume into entries in first-seen order
    pub fn into_entries(self) -> Vec<RankedKeyword> {
        self.entries
    }
}

/// Score every distinct candidate phrase
///
/// When `min_keyword_frequency > 1`, phrases occurring fewer times than that
/// in `phrases` are left out entirely.
pub fn generate_candidate_keyword_scores<S: AsRef<str>>(
    phrases: &[S],
    word_scores: &WordScores,
    min_keyword_frequency: usize,
) -> CandidateScores {
    let counts = (min_keyword_frequency > 1).then(|| count_occurrences(phrases));

    let mut candidates = CandidateScores::new();
    for phrase in phrases {
        let phrase = phrase.as_ref();
        if let Some(counts) = &counts {
            if counts.get(phrase).copied().unwrap_or(0) < min_keyword_frequency {
                continue;
            }
        }
        if candidates.contains(phrase) {
            continue;
        }
        candidates.insert(phrase, phrase_score(phrase, word_scores));
    }
    candidates
}
