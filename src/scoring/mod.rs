//! RAKE scoring
//!
//! Word scores come from degree and frequency in the co-occurrence graph of
//! candidate phrases; phrase scores are the sum of their word scores.

pub mod candidate;
pub mod word;
