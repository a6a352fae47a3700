//! Command implementations

pub mod check;
pub mod reveal;
pub mod simple;

pub use check::{CheckResult, Verdict, check_words};
pub use reveal::{RevealResult, reveal_words};
pub use simple::run_simple;
