//! Common types for the crossword engine: entry errors and guess outcomes.

/// Result of submitting a candidate answer for a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessOutcome {
    /// Candidate matched the word (ignoring case).
    pub correct: bool,
    /// Word had already been solved before this submission.
    pub already_solved: bool,
}

impl GuessOutcome {
    pub const WRONG: Self = Self {
        correct: false,
        already_solved: false,
    };

    /// `true` only for the first correct submission of a word.
    pub fn is_new_solve(&self) -> bool {
        self.correct && !self.already_solved
    }
}

/// Errors returned when building a [`WordEntry`](crate::WordEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    /// Word is empty after trimming.
    EmptyWord,
    /// Word contains something other than letters.
    InvalidLetter(char),
    /// Clue is empty after trimming.
    EmptyClue,
}

impl core::fmt::Display for EntryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EntryError::EmptyWord => write!(f, "Word is empty"),
            EntryError::InvalidLetter(c) => write!(f, "Word contains a non-letter character {:?}", c),
            EntryError::EmptyClue => write!(f, "Clue is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntryError {}
