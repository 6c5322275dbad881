//! Word co-occurrence statistics and word scores
//!
//! Words appearing in the same candidate phrase are connected. For each word
//! we track its frequency and the number of co-occurring words across all
//! phrases; degree folds the frequency back in so that words only ever seen
//! alone still score 1.
//!
//! Score: `deg(w) / freq(w)` where `deg(w) = co_degree(w) + freq(w)`.

use rustc_hash::FxHashMap;

use crate::nlp::tokenizer::separate_words;

/// Accumulated counters for one distinct word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNode {
    /// The lower-cased word
    pub word: String,
    /// Occurrences across all phrases
    pub frequency: usize,
    /// Sum of (phrase word count - 1) over every occurrence
    pub co_degree: usize,
}

impl WordNode {
    fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            frequency: 0,
            co_degree: 0,
        }
    }

    /// Degree including self co-occurrence
    pub fn degree(&self) -> usize {
        self.co_degree + self.frequency
    }

    /// `degree / frequency`
    ///
    /// Nodes are only created for observed words, so frequency is at least 1.
    pub fn score(&self) -> f64 {
        self.degree() as f64 / self.frequency as f64
    }
}

/// Word co-occurrence accumulator
///
/// Nodes are stored in first-seen order.
#[derive(Debug, Default)]
pub struct CooccurrenceStats {
    /// Maps word -> node ID
    word_to_id: FxHashMap<String, usize>,
    /// Node storage
    nodes: Vec<WordNode>,
}

impl CooccurrenceStats {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Accumulate statistics over candidate phrases
    pub fn from_phrases<S: AsRef<str>>(phrases: &[S]) -> Self {
        let mut stats = Self::with_capacity(phrases.len());
        for phrase in phrases {
            stats.observe_words(&separate_words(phrase.as_ref(), 0));
        }
        stats
    }

    /// Get or create a node for the given word, returning its ID
    pub fn get_or_create_node(&mut self, word: &str) -> usize {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len();
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(WordNode::new(word));
        id
    }

    /// Record the words of one phrase
    ///
    /// Every occurrence adds one to frequency and `words.len() - 1` to
    /// co-degree, repeated words included.
    pub fn observe_words(&mut self, words: &[String]) {
        let co_degree = words.len().saturating_sub(1);
        for word in words {
            let id = self.get_or_create_node(word);
            let node = &mut self.nodes[id];
            node.frequency += 1;
            node.co_degree += co_degree;
        }
    }

    /// Get the number of distinct words
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by word
    pub fn get(&self, word: &str) -> Option<&WordNode> {
        self.word_to_id
            .get(word)
            .and_then(|&id| self.nodes.get(id))
    }

    /// Iterate over nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &WordNode> {
        self.nodes.iter()
    }

    /// Check if no word has been observed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Compute the score of every observed word
    pub fn word_scores(&self) -> WordScores {
        let scores = self
            .nodes
            .iter()
            .map(|node| (node.word.clone(), node.score()))
            .collect();
        WordScores { scores }
    }
}

/// Per-word RAKE scores
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordScores {
    scores: FxHashMap<String, f64>,
}

impl WordScores {
    /// Score of a word, if it was observed
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Check if a word has a score
    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    /// Iterate over (word, score) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(w, &s)| (w.as_str(), s))
    }

    /// Number of scored words
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no word is scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(String, f64)> for WordScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Score every word appearing in `phrases`
pub fn calculate_word_scores<S: AsRef<str>>(phrases: &[S]) -> WordScores {
    CooccurrenceStats::from_phrases(phrases).word_scores()
}
