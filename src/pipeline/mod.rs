//! Extraction pipeline
//!
//! The runner threads text through the RAKE stages; observers receive
//! notifications at each stage boundary.

pub mod observer;
pub mod runner;
