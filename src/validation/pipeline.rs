//! Ordered validation of candidate words
//!
//! Candidates are normalized, then run through [`Check::ORDER`]. The first
//! failing check decides the rejection; later checks never run. The order is a
//! user-facing priority: when a word breaks several rules the player hears
//! about the earliest one.

use crate::core::{GameState, Rejection, letter_count, normalize};
use crate::dictionary::{DEFAULT_LOCALE, DictionaryOracle};
use std::fmt;
use tracing::trace;

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// A normalized word that passed every check
///
/// Hand it to [`GameState::record_acceptance`] to score it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AcceptedWord(String);

impl AcceptedWord {
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters
    #[must_use]
    pub fn len(&self) -> usize {
        letter_count(&self.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AcceptedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One rule a candidate must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// Not already used this game
    Originality,
    /// Spellable from the root word's letters
    Possibility,
    /// Known to the dictionary
    Recognition,
    /// At least [`MIN_WORD_LENGTH`] letters
    MinimumLength,
    /// Not the root word itself
    NotRoot,
}

impl Check {
    /// The order checks run in
    pub const ORDER: [Self; 5] = [
        Self::Originality,
        Self::Possibility,
        Self::Recognition,
        Self::MinimumLength,
        Self::NotRoot,
    ];

    /// The rejection reported when this check fails
    #[must_use]
    pub const fn rejection(self) -> Rejection {
        match self {
            Self::Originality => Rejection::Duplicate,
            Self::Possibility => Rejection::Impossible,
            Self::Recognition => Rejection::Unrecognized,
            Self::MinimumLength => Rejection::TooShort,
            Self::NotRoot => Rejection::IsRoot,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Originality => "originality",
            Self::Possibility => "possibility",
            Self::Recognition => "recognition",
            Self::MinimumLength => "minimum length",
            Self::NotRoot => "not root word",
        }
    }

    /// Run this check against a normalized `word`
    pub fn passes<D: DictionaryOracle + ?Sized>(
        self,
        word: &str,
        state: &GameState,
        oracle: &D,
        locale: &str,
    ) -> bool {
        match self {
            Self::Originality => state.is_original(word),
            Self::Possibility => state.is_possible(word),
            Self::Recognition => oracle.is_word(word, locale),
            Self::MinimumLength => letter_count(word) >= MIN_WORD_LENGTH,
            Self::NotRoot => state.is_new_word(word),
        }
    }
}

/// Validates candidates against a game without changing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPipeline {
    locale: String,
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl ValidationPipeline {
    /// Pipeline that asks the dictionary about `locale`
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Validate raw player input
    ///
    /// Returns `Ok(None)` for blank input, which callers ignore without
    /// telling the player anything.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first failing check.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{GameState, Rejection};
    /// use word_scramble::dictionary::WordSet;
    /// use word_scramble::validation::ValidationPipeline;
    ///
    /// let state = GameState::new("listen", 12);
    /// let dictionary = WordSet::english(["silt", "lists"]);
    /// let pipeline = ValidationPipeline::default();
    ///
    /// let accepted = pipeline.validate(" SILT ", &state, &dictionary).unwrap().unwrap();
    /// assert_eq!(accepted.text(), "silt");
    /// assert_eq!(pipeline.validate("lists", &state, &dictionary), Err(Rejection::Impossible));
    /// assert_eq!(pipeline.validate("   ", &state, &dictionary), Ok(None));
    /// ```
    pub fn validate<D: DictionaryOracle + ?Sized>(
        &self,
        raw_input: &str,
        state: &GameState,
        oracle: &D,
    ) -> Result<Option<AcceptedWord>, Rejection> {
        let Some(word) = normalize(raw_input) else {
            trace!("ignoring blank submission");
            return Ok(None);
        };

        if let Some(check) = self.first_failure(&word, state, oracle) {
            trace!(word = %word, check = check.name(), "check failed");
            return Err(check.rejection());
        }

        Ok(Some(AcceptedWord(word)))
    }

    /// The first check a normalized `word` fails, if any
    pub fn first_failure<D: DictionaryOracle + ?Sized>(
        &self,
        word: &str,
        state: &GameState,
        oracle: &D,
    ) -> Option<Check> {
        Check::ORDER
            .into_iter()
            .find(|check| !check.passes(word, state, oracle, &self.locale))
    }
}
