//! Word normalization and letter pools
//!
//! Every word that enters the game passes through [`normalize`], so storage,
//! comparison and letter counting all see the same form.

use rustc_hash::FxHashMap;

/// Normalize raw input: trim surrounding whitespace and lowercase
///
/// Returns `None` if nothing is left after trimming.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  CaT  ").as_deref(), Some("cat"));
/// assert_eq!(normalize(" \t\n"), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}

/// Number of letters in a word
///
/// Counts characters rather than bytes so accented letters count once.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Multiset of the letters available in a word
///
/// Built once per root word and cloned for every spelling check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build the pool of letters in `word`
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `letter` remain in the pool
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters left
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) if the letter is used up.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Walks the candidate letter by letter, consuming one copy from a scratch
    /// pool each time, and stops at the first letter that is not available.
    /// A letter repeated in the candidate must therefore be repeated at least
    /// as often in the pool.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("listen");
    /// assert!(pool.can_spell("silt"));
    /// assert!(!pool.can_spell("lists"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.take(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  CaT  ").as_deref(), Some("cat"));
        assert_eq!(normalize("Listen\n").as_deref(), Some("listen"));
        assert_eq!(normalize("cat").as_deref(), Some("cat"));
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" ice cream ").as_deref(), Some("ice cream"));
    }

    #[test]
    fn normalize_blank_is_none() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("\t\r\n"), None);
    }

    #[test]
    fn letter_count_uses_chars() {
        assert_eq!(letter_count("cat"), 3);
        assert_eq!(letter_count("café"), 4);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::new("silkworm");
        assert_eq!(pool.count('s'), 1);
        assert_eq!(pool.count('z'), 0);
        assert_eq!(pool.len(), 8);

        let pool = LetterPool::new("football");
        assert_eq!(pool.count('o'), 2);
        assert_eq!(pool.count('l'), 2);
    }

    #[test]
    fn pool_take_consumes_one_copy() {
        let mut pool = LetterPool::new("odd");
        assert!(pool.take('d'));
        assert_eq!(pool.count('d'), 1);
        assert!(pool.take('d'));
        assert!(!pool.take('d'));
        assert!(!pool.take('x'));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn can_spell_from_listen() {
        let pool = LetterPool::new("listen");
        assert!(pool.can_spell("silt"));
        assert!(pool.can_spell("tin"));
        assert!(pool.can_spell("silent"));
        assert!(!pool.can_spell("lists")); // only one 's' available
        assert!(!pool.can_spell("tint")); // only one 't' available
        assert!(!pool.can_spell("lisp")); // no 'p'
    }

    #[test]
    fn can_spell_does_not_consume_pool() {
        let pool = LetterPool::new("cat");
        assert!(pool.can_spell("act"));
        assert!(pool.can_spell("act"));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn can_spell_empty_word() {
        assert!(LetterPool::new("cat").can_spell(""));
        assert!(LetterPool::default().is_empty());
    }

    #[test]
    fn can_spell_repeated_letters() {
        let pool = LetterPool::new("football");
        assert!(pool.can_spell("tool"));
        assert!(pool.can_spell("ball"));
        assert!(!pool.can_spell("balloon")); // needs an 'n'
    }
}
