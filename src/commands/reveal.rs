//! Reveal command
//!
//! Finds every dictionary word the current game would still accept.

use crate::core::{GameState, letter_count};
use crate::dictionary::DictionaryOracle;
use crate::validation::ValidationPipeline;
use rayon::prelude::*;

/// Words still available in a game
pub struct RevealResult {
    pub root_word: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Most points the remaining words can add, bonus included
    pub available_points: u32,
}

/// Scan `candidates` for words the pipeline would accept right now
///
/// Candidates are checked in parallel; the game state is only read.
/// `available_points` replays the words shortest first on a copy of the
/// state, so the longest words land after the bonus threshold.
pub fn reveal_words<D, S>(
    state: &GameState,
    pipeline: &ValidationPipeline,
    oracle: &D,
    candidates: &[S],
) -> RevealResult
where
    D: DictionaryOracle + Sync + ?Sized,
    S: AsRef<str> + Sync,
{
    let mut words: Vec<String> = candidates
        .par_iter()
        .filter_map(|candidate| {
            pipeline
                .validate(candidate.as_ref(), state, oracle)
                .ok()
                .flatten()
        })
        .map(crate::validation::AcceptedWord::into_inner)
        .collect();

    words.sort_unstable_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let mut replay = state.clone();
    for word in words.iter().rev() {
        replay.record_acceptance(word);
    }

    RevealResult {
        root_word: state.root_word().to_string(),
        available_points: replay.score() - state.score(),
        words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;

    fn candidates() -> Vec<&'static str> {
        vec![
            "silt", "tin", "lists", "listen", "silent", "inlet", "in", "nest", "zebra", "tin",
        ]
    }

    #[test]
    fn reveal_filters_and_sorts() {
        let list = candidates();
        let dictionary = WordSet::english(&list);
        let state = GameState::new("listen", 12);

        let result = reveal_words(&state, &ValidationPipeline::default(), &dictionary, &list);

        assert_eq!(result.root_word, "listen");
        assert_eq!(result.words, vec!["silent", "inlet", "nest", "silt", "tin"]);
        assert_eq!(result.available_points, 6 + 5 + 4 + 4 + 3);
    }

    #[test]
    fn reveal_skips_used_words() {
        let list = candidates();
        let dictionary = WordSet::english(&list);
        let mut state = GameState::new("listen", 12);
        state.record_acceptance("silent");

        let result = reveal_words(&state, &ValidationPipeline::default(), &dictionary, &list);
        assert!(!result.words.contains(&"silent".to_string()));
        assert_eq!(result.available_points, 5 + 4 + 4 + 3);
    }

    #[test]
    fn available_points_puts_long_words_after_bonus() {
        let list = ["tin", "silt", "silent"];
        let dictionary = WordSet::english(list);
        let state = GameState::new("listen", 1);

        let result = reveal_words(&state, &ValidationPipeline::default(), &dictionary, &list);
        // tin x1, silt x1, silent x2
        assert_eq!(result.available_points, 3 + 4 + 12);
    }

    #[test]
    fn reveal_on_unknown_letters_is_empty() {
        let list = ["zebra", "quiz"];
        let dictionary = WordSet::english(list);
        let state = GameState::new("listen", 12);

        let result = reveal_words(&state, &ValidationPipeline::default(), &dictionary, &list);
        assert!(result.words.is_empty());
        assert_eq!(result.available_points, 0);
    }
}
