//! Game state: root word, used words and score

use super::word::{LetterPool, letter_count, normalize};
use tracing::debug;

/// Accepted-word count above which new words score double
pub const DEFAULT_BONUS_THRESHOLD: usize = 12;

/// State of a single game
///
/// Owned by whoever drives the game and handed to the validation pipeline by
/// reference. Between resets it only changes through [`GameState::record_acceptance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    root_word: String,
    letters: LetterPool,
    /// Newest first
    used_words: Vec<String>,
    score: u32,
    bonus_threshold: usize,
}

impl GameState {
    /// Create a state with a game already started on `root_word`
    ///
    /// # Panics
    /// Panics if `root_word` is blank, see [`GameState::start_game`].
    #[must_use]
    pub fn new(root_word: &str, bonus_threshold: usize) -> Self {
        let mut state = Self {
            root_word: String::new(),
            letters: LetterPool::default(),
            used_words: Vec::new(),
            score: 0,
            bonus_threshold,
        };
        state.start_game(root_word);
        state
    }

    /// Start a new game on `root_word`, clearing used words and score
    ///
    /// # Panics
    /// Panics if `root_word` is blank after trimming. Callers resolve the root
    /// word (with a fallback) before getting here, so a blank one is a setup bug.
    pub fn start_game(&mut self, root_word: &str) {
        let Some(root_word) = normalize(root_word) else {
            panic!("start_game requires a non-empty root word");
        };

        debug!(root_word = %root_word, "starting game");
        self.letters = LetterPool::new(&root_word);
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
    }

    /// Record a word that already passed validation
    ///
    /// The word goes to the front of the used-word list. Points are its letter
    /// count times [`GameState::multiplier`], which is read *before* the
    /// insertion. Returns the points earned.
    pub fn record_acceptance(&mut self, word: &str) -> u32 {
        let word = word.trim().to_lowercase();
        let points = letter_count(&word) as u32 * self.multiplier();

        self.used_words.insert(0, word);
        self.score += points;
        points
    }

    /// `true` if `word` has not been used in this game
    #[must_use]
    pub fn is_original(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        !self.used_words.contains(&word)
    }

    /// `true` if `word` is not the root word
    #[must_use]
    pub fn is_new_word(&self, word: &str) -> bool {
        word.trim().to_lowercase() != self.root_word
    }

    /// `true` if `word` can be spelled from the root word's letters
    #[must_use]
    pub fn is_possible(&self, word: &str) -> bool {
        self.letters.can_spell(&word.trim().to_lowercase())
    }

    /// Multiplier the next accepted word will earn
    #[must_use]
    pub fn multiplier(&self) -> u32 {
        if self.bonus_active() { 2 } else { 1 }
    }

    /// `true` once the word count has passed the bonus threshold
    #[must_use]
    pub fn bonus_active(&self) -> bool {
        self.used_words.len() > self.bonus_threshold
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Letters of the root word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterPool {
        &self.letters
    }

    /// Accepted words, newest first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used_words.len()
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn bonus_threshold(&self) -> usize {
        self.bonus_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_empty() {
        let state = GameState::new("Listen", DEFAULT_BONUS_THRESHOLD);
        assert_eq!(state.root_word(), "listen");
        assert!(state.used_words().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.bonus_threshold(), 12);
    }

    #[test]
    fn start_game_normalizes_root() {
        let state = GameState::new("  SilkWorm \n", DEFAULT_BONUS_THRESHOLD);
        assert_eq!(state.root_word(), "silkworm");
        assert_eq!(state.letters().len(), 8);
    }

    #[test]
    #[should_panic(expected = "non-empty root word")]
    fn start_game_blank_root_panics() {
        let _ = GameState::new("   ", DEFAULT_BONUS_THRESHOLD);
    }

    #[test]
    fn record_acceptance_inserts_newest_first() {
        let mut state = GameState::new("listen", DEFAULT_BONUS_THRESHOLD);
        state.record_acceptance("tin");
        state.record_acceptance("silt");
        assert_eq!(state.used_words(), &["silt", "tin"]);
        assert_eq!(state.score(), 7);
    }

    #[test]
    fn record_acceptance_returns_points() {
        let mut state = GameState::new("listen", DEFAULT_BONUS_THRESHOLD);
        assert_eq!(state.record_acceptance("silent"), 6);
        assert_eq!(state.record_acceptance("  Tin "), 3);
        assert_eq!(state.used_words()[0], "tin");
    }

    #[test]
    fn bonus_starts_after_threshold_is_exceeded() {
        let mut state = GameState::new("abcdefghijklmnop", 12);

        // Pre-insertion counts 0..=12 are not above the threshold
        for i in 0..13 {
            assert_eq!(state.multiplier(), 1, "word {} should score single", i + 1);
            assert_eq!(state.record_acceptance("abcd"), 4);
        }
        assert_eq!(state.score(), 52);
        assert!(state.bonus_active());

        // 14th word sees a pre-count of 13
        assert_eq!(state.record_acceptance("efgh"), 8);
        assert_eq!(state.score(), 60);
    }

    #[test]
    fn twelve_words_score_single() {
        let mut state = GameState::new("abcdefghijklmnop", 12);
        for _ in 0..12 {
            state.record_acceptance("abcd");
        }
        assert_eq!(state.score(), 48);
        assert!(!state.bonus_active());
    }

    #[test]
    fn zero_threshold_doubles_from_second_word() {
        let mut state = GameState::new("listen", 0);
        assert_eq!(state.record_acceptance("tin"), 3);
        assert_eq!(state.record_acceptance("silt"), 8);
    }

    #[test]
    fn queries() {
        let mut state = GameState::new("listen", DEFAULT_BONUS_THRESHOLD);
        state.record_acceptance("silt");

        assert!(!state.is_original("silt"));
        assert!(!state.is_original(" SILT "));
        assert!(state.is_original("tin"));

        assert!(!state.is_new_word("listen"));
        assert!(!state.is_new_word("Listen "));
        assert!(state.is_new_word("silent"));

        assert!(state.is_possible("inlet"));
        assert!(!state.is_possible("lists"));
    }

    #[test]
    fn start_game_mid_session_resets() {
        let mut state = GameState::new("listen", DEFAULT_BONUS_THRESHOLD);
        state.record_acceptance("silt");
        state.record_acceptance("tin");
        assert_eq!(state.word_count(), 2);

        state.start_game("silkworm");
        assert_eq!(state.root_word(), "silkworm");
        assert_eq!(state.word_count(), 0);
        assert_eq!(state.score(), 0);
        assert!(state.is_original("silt"));
        assert!(state.is_possible("worm"));
    }
}
