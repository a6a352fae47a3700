//! Word checking command
//!
//! Plays a list of words, in order, against a game on a given root word.

use crate::core::Rejection;
use crate::dictionary::DictionaryOracle;
use crate::session::{ScoredWord, Session};

/// What happened to one submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub input: String,
    pub outcome: Result<Option<ScoredWord>, Rejection>,
}

/// Result of checking a list of words
pub struct CheckResult {
    pub root_word: String,
    pub verdicts: Vec<Verdict>,
    pub score: u32,
    pub accepted: usize,
}

/// Submit each word in turn, applying acceptances as they happen
///
/// Later words see the effect of earlier ones, so repeating a word yields a
/// duplicate rejection.
pub fn check_words<D: DictionaryOracle>(session: &mut Session<D>, words: &[String]) -> CheckResult {
    let verdicts = words
        .iter()
        .map(|input| Verdict {
            input: input.clone(),
            outcome: session.submit(input),
        })
        .collect();

    CheckResult {
        root_word: session.root_word().to_string(),
        verdicts,
        score: session.score(),
        accepted: session.used_words().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use crate::session::GameConfig;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn check_mixed_words() {
        let dictionary = WordSet::english(["silt", "tin", "lists", "listen", "in"]);
        let mut session = Session::with_root(&GameConfig::default(), dictionary, "listen");

        let result = check_words(
            &mut session,
            &words(&["silt", "SILT", "lists", "nest", "in", "listen", "  ", "tin"]),
        );

        let outcomes: Vec<_> = result
            .verdicts
            .iter()
            .map(|v| v.outcome.as_ref().map(|o| o.as_ref().map(|s| s.points)))
            .collect();

        assert_eq!(
            outcomes,
            vec![
                Ok(Some(4)),
                Err(&Rejection::Duplicate),
                Err(&Rejection::Impossible),
                Err(&Rejection::Unrecognized),
                Err(&Rejection::TooShort),
                Err(&Rejection::IsRoot),
                Ok(None),
                Ok(Some(3)),
            ]
        );
        assert_eq!(result.root_word, "listen");
        assert_eq!(result.score, 7);
        assert_eq!(result.accepted, 2);
    }

    #[test]
    fn check_nothing() {
        let mut session =
            Session::with_root(&GameConfig::default(), WordSet::default(), "listen");
        let result = check_words(&mut session, &[]);
        assert!(result.verdicts.is_empty());
        assert_eq!(result.score, 0);
    }
}
