//! Game session orchestration
//!
//! A [`Session`] owns everything one player needs: the game state, the
//! validation pipeline, the dictionary, the root word list and the random
//! number generator used to pick root words. Front ends talk only to it.

use crate::core::{DEFAULT_BONUS_THRESHOLD, GameState, Rejection};
use crate::dictionary::{DEFAULT_LOCALE, DictionaryOracle};
use crate::validation::ValidationPipeline;
use crate::wordlists::choose_root_word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Accepted-word count above which words score double
    pub bonus_threshold: usize,
    /// Locale the dictionary is asked about
    pub locale: String,
    /// Seed for root word selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bonus_threshold: DEFAULT_BONUS_THRESHOLD,
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
        }
    }
}

/// An accepted submission and what it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub points: u32,
    /// Whether the bonus multiplier applied
    pub bonus: bool,
}

/// One player's game
pub struct Session<D: DictionaryOracle> {
    state: GameState,
    pipeline: ValidationPipeline,
    dictionary: D,
    root_words: Vec<String>,
    rng: StdRng,
}

impl<D: DictionaryOracle> Session<D> {
    /// Start a session on a random word from `root_words`
    ///
    /// An empty `root_words` list falls back to
    /// [`DEFAULT_ROOT_WORD`](crate::wordlists::DEFAULT_ROOT_WORD).
    pub fn new(config: &GameConfig, dictionary: D, root_words: Vec<String>) -> Self {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let root_word = choose_root_word(&root_words, &mut rng);

        info!(
            root_words = root_words.len(),
            bonus_threshold = config.bonus_threshold,
            "session created"
        );

        Self {
            state: GameState::new(&root_word, config.bonus_threshold),
            pipeline: ValidationPipeline::new(config.locale.clone()),
            dictionary,
            root_words,
            rng,
        }
    }

    /// Start a session on a fixed root word
    ///
    /// [`Session::start_over`] keeps returning to the same word.
    ///
    /// # Panics
    /// Panics if `root_word` is blank.
    pub fn with_root(config: &GameConfig, dictionary: D, root_word: &str) -> Self {
        Self::new(config, dictionary, vec![root_word.to_string()])
    }

    /// Validate raw input and, if accepted, record it
    ///
    /// Returns `Ok(None)` for blank input.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] explaining why the word was not accepted.
    /// The game state is left unchanged.
    pub fn submit(&mut self, raw_input: &str) -> Result<Option<ScoredWord>, Rejection> {
        let Some(accepted) = self
            .pipeline
            .validate(raw_input, &self.state, &self.dictionary)
            .inspect_err(|rejection| debug!(input = raw_input, %rejection, "rejected"))?
        else {
            return Ok(None);
        };

        let bonus = self.state.bonus_active();
        let points = self.state.record_acceptance(accepted.text());
        debug!(
            word = accepted.text(),
            points,
            score = self.state.score(),
            "accepted"
        );

        Ok(Some(ScoredWord {
            word: accepted.into_inner(),
            points,
            bonus,
        }))
    }

    /// Pick a new random root word and reset the game
    ///
    /// Returns the new root word.
    pub fn start_over(&mut self) -> &str {
        let root_word = choose_root_word(&self.root_words, &mut self.rng);
        self.state.start_game(&root_word);
        self.state.root_word()
    }

    /// Reset the game on a specific root word
    ///
    /// # Panics
    /// Panics if `root_word` is blank.
    pub fn start_game(&mut self, root_word: &str) {
        self.state.start_game(root_word);
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn pipeline(&self) -> &ValidationPipeline {
        &self.pipeline
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        self.state.root_word()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.state.score()
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.state.used_words()
    }
}
