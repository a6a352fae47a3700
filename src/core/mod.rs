//! Core domain types for the game
//!
//! Word normalization, letter pools, game state and rejection reasons.
//! Nothing here does I/O; everything is pure and directly testable.

mod rejection;
mod state;
mod word;

pub use rejection::{Alert, Rejection};
pub use state::{DEFAULT_BONUS_THRESHOLD, GameState};
pub use word::{LetterPool, letter_count, normalize};
