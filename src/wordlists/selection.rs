//! Root word selection

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::warn;

/// Root word used when the word list has nothing to offer
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Pick one word uniformly at random
///
/// Returns `None` for an empty list.
pub fn pick_random<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> Option<&'a str> {
    words.choose(rng).map(String::as_str)
}

/// Pick a root word, falling back to [`DEFAULT_ROOT_WORD`] for an empty list
pub fn choose_root_word<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> String {
    pick_random(words, rng).map_or_else(
        || {
            warn!(
                fallback = DEFAULT_ROOT_WORD,
                "root word list is empty, using fallback"
            );
            DEFAULT_ROOT_WORD.to_string()
        },
        str::to_string,
    )
}
