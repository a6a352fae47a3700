//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordListError;
use crate::core::normalize;
use std::fs;
use std::path::Path;

/// Load a newline-delimited word list from a file
///
/// Lines are trimmed and lowercased; blank lines are skipped. An empty file
/// yields an empty list, not an error.
///
/// # Errors
///
/// Returns [`WordListError::Read`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_text(&content))
}

/// Split newline-delimited text into normalized words
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines().filter_map(normalize).collect()
}

/// Convert embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["Silkworm", "  listen ", "TRIANGLE"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silkworm", "listen", "triangle"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["crane", "", "   ", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0], "crane");
        assert_eq!(words[1], "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_text_handles_crlf_and_trailing_newline() {
        let words = words_from_text("alpha\r\nbeta\n\ngamma\n");
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn load_missing_file_is_error() {
        let result = load_from_file("definitely/not/here/start.txt");
        assert!(matches!(result, Err(WordListError::Read { .. })));
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "Listen\nsilkworm\n\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["listen", "silkworm"]);
    }
}
