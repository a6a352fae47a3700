//! Word Scramble
//!
//! A word-derivation game: make as many words as you can from the letters of
//! a root word. Longer words score more, and every word after the bonus
//! threshold scores double.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::session::{GameConfig, Session};
//!
//! let dictionary = WordSet::english(["silt", "tin", "silent"]);
//! let mut session = Session::with_root(&GameConfig::default(), dictionary, "listen");
//!
//! let scored = session.submit("Silent").unwrap().unwrap();
//! assert_eq!(scored.points, 6);
//! assert!(session.submit("silent").is_err()); // already used
//! ```

// Core domain types
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Candidate validation
pub mod validation;

// Word lists
pub mod wordlists;

// Game orchestration
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
