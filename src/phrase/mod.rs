//! Phrase extraction components
//!
//! This module provides candidate phrase extraction between stop-word
//! boundaries and the acceptability filter applied to each candidate.

pub mod extraction;
pub mod filter;
