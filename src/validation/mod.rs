//! Candidate validation
//!
//! A fixed chain of checks run against a candidate and the current game.

mod pipeline;

pub use pipeline::{AcceptedWord, Check, MIN_WORD_LENGTH, ValidationPipeline};
