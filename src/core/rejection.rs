//! Rejection reasons and their user-facing alerts

use thiserror::Error;

/// Why a candidate word was turned down
///
/// The `Display` form is the alert title; [`Rejection::message`] supplies the
/// longer explanation shown underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// Already in the used-word list
    #[error("Word used already")]
    Duplicate,
    /// Cannot be spelled from the root word's letters
    #[error("Word not possible")]
    Impossible,
    /// The dictionary does not know it
    #[error("Word not recognized")]
    Unrecognized,
    /// Fewer than three letters
    #[error("Word is too short")]
    TooShort,
    /// The root word itself
    #[error("Entered root word")]
    IsRoot,
}

/// Title and message pair for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Rejection {
    /// Every rejection, in the order the pipeline can produce them
    pub const ALL: [Self; 5] = [
        Self::Duplicate,
        Self::Impossible,
        Self::Unrecognized,
        Self::TooShort,
        Self::IsRoot,
    ];

    /// Stable upper-case identifier, used in command output
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Duplicate => "DUPLICATE",
            Self::Impossible => "IMPOSSIBLE",
            Self::Unrecognized => "UNRECOGNIZED",
            Self::TooShort => "TOO_SHORT",
            Self::IsRoot => "IS_ROOT",
        }
    }

    /// Short alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Duplicate => "Word used already",
            Self::Impossible => "Word not possible",
            Self::Unrecognized => "Word not recognized",
            Self::TooShort => "Word is too short",
            Self::IsRoot => "Entered root word",
        }
    }

    /// Explanation shown under the title
    ///
    /// Only [`Rejection::Impossible`] mentions the root word.
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::Duplicate => "Be more original".to_string(),
            Self::Impossible => format!("You cannot spell that word from '{root_word}'"),
            Self::Unrecognized => "You can't make up words".to_string(),
            Self::TooShort => "Words must be 3 letters or longer".to_string(),
            Self::IsRoot => "You can't just submit the starting word".to_string(),
        }
    }

    /// Build the full alert for a game on `root_word`
    #[must_use]
    pub fn alert(self, root_word: &str) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message(root_word),
        }
    }
}
