//! Natural Language Processing components
//!
//! This module provides stop-word sources, the stop-word pattern,
//! sentence splitting, and word tokenization.

pub mod pattern;
pub mod sentence;
pub mod stopwords;
pub mod tokenizer;
