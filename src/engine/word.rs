//! Word entries and their placements on the grid.

use alloc::string::String;
use alloc::vec::Vec;

use crate::engine::common::EntryError;

/// Direction a placed word runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The direction crossing this one.
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Row/column step taken when moving one letter along the word.
    pub(crate) fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Cell `n` letters further along from `(row, col)`.
    pub(crate) fn advance(self, (row, col): (usize, usize), n: usize) -> (usize, usize) {
        let (dr, dc) = self.step();
        (row + dr * n, col + dc * n)
    }
}

/// Canonical form used for every word comparison.
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

/// A word and its clue, as supplied by the word source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct WordEntry {
    word: String,
    clue: String,
}

impl WordEntry {
    /// Validate and normalize a word/clue pair. The word is upper-cased and
    /// must consist of letters only.
    pub fn new(word: &str, clue: &str) -> Result<Self, EntryError> {
        let word = normalize(word);
        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }
        if let Some(bad) = word.chars().find(|c| !c.is_alphabetic()) {
            return Err(EntryError::InvalidLetter(bad));
        }
        let clue = clue.trim();
        if clue.is_empty() {
            return Err(EntryError::EmptyClue);
        }
        Ok(Self {
            word,
            clue: String::from(clue),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Length in letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub(crate) fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }
}

/// A word committed to the grid. Immutable once the grid is built.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlacedWord {
    word: String,
    clue: String,
    row: usize,
    col: usize,
    direction: Direction,
    number: usize,
}

impl PlacedWord {
    pub(crate) fn new(
        entry: &WordEntry,
        row: usize,
        col: usize,
        direction: Direction,
        number: usize,
    ) -> Self {
        Self {
            word: entry.word.clone(),
            clue: entry.clue.clone(),
            row,
            col,
            direction,
            number,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Top-left anchor (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sequence number, assigned in placement order starting at 1.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Coordinate of the `i`-th letter.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        self.direction.advance(self.origin(), i)
    }

    /// Coordinate of the last letter.
    pub fn end(&self) -> (usize, usize) {
        self.cell(self.len().saturating_sub(1))
    }

    /// Coordinates and letters of the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), char)> + '_ {
        self.word.chars().enumerate().map(move |(i, ch)| (self.cell(i), ch))
    }

    /// Whether the word passes through (row, col).
    pub fn covers(&self, row: usize, col: usize) -> bool {
        let len = self.len();
        match self.direction {
            Direction::Across => row == self.row && col >= self.col && col < self.col + len,
            Direction::Down => col == self.col && row >= self.row && row < self.row + len,
        }
    }

    /// Case-insensitive comparison with another word.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.to_uppercase() == self.word
    }
}

impl core::fmt::Debug for PlacedWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PlacedWord {{ number: {}, word: \"{}\", origin: ({}, {}), direction: {:?} }}",
            self.number, self.word, self.row, self.col, self.direction,
        )
    }
}
