//! Word lists for the game
//!
//! Embedded root words and dictionary compiled into the binary, plus loading
//! of user-supplied newline-delimited lists and root word selection.

mod embedded;
pub mod loader;
mod selection;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use selection::{DEFAULT_ROOT_WORD, choose_root_word, pick_random};

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Failure to obtain a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited file
    File(PathBuf),
}

impl WordListSource {
    /// Parse a command-line value: `all` means embedded, anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "all" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the list, using `embedded` for [`WordListSource::Embedded`]
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Read`] if a file source cannot be read.
    pub fn load(&self, embedded: &[&str]) -> Result<Vec<String>, WordListError> {
        let words = match self {
            Self::Embedded => loader::words_from_slice(embedded),
            Self::File(path) => loader::load_from_file(path)?,
        };
        debug!(source = ?self, count = words.len(), "loaded word list");
        Ok(words)
    }

    /// Load root words (embedded default: [`ROOT_WORDS`])
    ///
    /// # Errors
    ///
    /// See [`WordListSource::load`].
    pub fn load_root_words(&self) -> Result<Vec<String>, WordListError> {
        self.load(ROOT_WORDS)
    }

    /// Load dictionary words (embedded default: [`DICTIONARY`])
    ///
    /// # Errors
    ///
    /// See [`WordListSource::load`].
    pub fn load_dictionary(&self) -> Result<Vec<String>, WordListError> {
        self.load(DICTIONARY)
    }
}
