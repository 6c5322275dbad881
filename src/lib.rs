//! # rapid-rake
//!
//! RAKE (Rapid Automatic Keyword Extraction) for Rust.
//!
//! RAKE is unsupervised and works on a single document: stop words and
//! punctuation split the text into candidate phrases, words are scored by
//! `degree / frequency` in the co-occurrence graph of those phrases, and a
//! phrase scores the sum of its word scores.
//!
//! ```
//! use rapid_rake::{rake, RakeConfig, StopwordList};
//!
//! let stopwords = StopwordList::from_list(&["of", "the", "over"]);
//! let keywords = rake(
//!     "Compatibility of systems of linear constraints over the set of natural numbers",
//!     &stopwords,
//!     &RakeConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(keywords[0].phrase, "linear constraints");
//! ```

pub mod error;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod scoring;
pub mod types;

pub use error::{RakeError, Result};
pub use nlp::pattern::StopwordMatcher;
pub use nlp::stopwords::StopwordList;
pub use pipeline::runner::{rank_keywords, Rake};
pub use types::{RakeConfig, RankedKeyword};

/// Extract ranked keywords from `text` in one call
///
/// Builds the stop-word matcher, runs the pipeline, and returns keywords
/// sorted by score, descending. Use [`Rake`] to reuse the compiled matcher
/// across documents.
pub fn rake(text: &str, stopwords: &StopwordList, config: &RakeConfig) -> Result<Vec<RankedKeyword>> {
    let extractor = Rake::with_config(stopwords, *config)?;
    Ok(extractor.extract(text))
}
