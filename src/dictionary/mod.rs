//! Dictionary oracle
//!
//! The pipeline asks a [`DictionaryOracle`] whether a candidate is a real
//! word. [`WordSet`] is the in-memory implementation used by the binary and
//! by tests.

use crate::core::normalize;
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Locale the game plays in
pub const DEFAULT_LOCALE: &str = "en";

/// Knows which strings are words of a language
pub trait DictionaryOracle {
    /// `true` if `word` is a recognized word of `locale`
    fn is_word(&self, word: &str, locale: &str) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_word(word, locale)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Box<T> {
    fn is_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_word(word, locale)
    }
}

/// Set of known words for one locale
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    locale: String,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from `words`, normalizing each entry
    pub fn new<I, S>(locale: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            locale: locale.into(),
            words: words
                .into_iter()
                .filter_map(|word| normalize(word.as_ref()))
                .collect(),
        }
    }

    /// English set from `words`
    pub fn english<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(DEFAULT_LOCALE, words)
    }

    /// English set backed by the embedded dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::english(DICTIONARY)
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl DictionaryOracle for WordSet {
    fn is_word(&self, word: &str, locale: &str) -> bool {
        same_language(&self.locale, locale) && self.contains(word)
    }
}

/// Compare the language part of two locale tags (`en`, `en_US`, `en-GB`)
fn same_language(a: &str, b: &str) -> bool {
    let language = |tag: &str| tag.split(['_', '-']).next().unwrap_or_default().to_string();
    language(a).eq_ignore_ascii_case(&language(b))
}
