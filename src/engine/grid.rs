//! Letter grid and the placements it holds.
//!
//! A [`Grid`] is frozen once built: the layout search works on a
//! [`GridBuilder`] and converts it with [`GridBuilder::build`].

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::engine::word::{normalize, Direction, PlacedWord, WordEntry};

/// Square letter grid with its placed words.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
    words: Vec<PlacedWord>,
}

impl Grid {
    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at (row, col); `None` for empty or out-of-range cells.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.letter(row, col).is_some()
    }

    /// Placed words in placement order.
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Number of placed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_by_number(&self, number: usize) -> Option<&PlacedWord> {
        self.words.iter().find(|w| w.number() == number)
    }

    /// Every word covering (row, col), in placement order. At most two.
    pub fn words_at(&self, row: usize, col: usize) -> impl Iterator<Item = &PlacedWord> + '_ {
        self.words.iter().filter(move |w| w.covers(row, col))
    }

    /// First word covering (row, col) in placement order.
    pub fn first_word_at(&self, row: usize, col: usize) -> Option<&PlacedWord> {
        self.words_at(row, col).next()
    }

    /// The word running in `direction` through (row, col).
    pub fn word_at(&self, row: usize, col: usize, direction: Direction) -> Option<&PlacedWord> {
        self.words_at(row, col).find(|w| w.direction() == direction)
    }

    /// Whether `word` (any case) was placed.
    pub fn contains_word(&self, word: &str) -> bool {
        let word = normalize(word);
        self.words.iter().any(|w| w.word() == word)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {}, words: {:?} }}", self.size, self.words)?;
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.letter(row, col).unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Mutable grid used while searching for placements.
pub(crate) struct GridBuilder {
    size: usize,
    cells: Vec<Option<char>>,
    across: Vec<bool>,
    down: Vec<bool>,
    words: Vec<PlacedWord>,
}

impl GridBuilder {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            across: vec![false; size * size],
            down: vec![false; size * size],
            words: Vec::new(),
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    fn letter(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    fn occupied(&self, row: usize, col: usize) -> bool {
        self.letter(row, col).is_some()
    }

    fn coverage(&self, direction: Direction) -> &[bool] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Check whether `letters` can be written starting at (row, col).
    ///
    /// `crossing` is the index of the letter shared with an already-placed
    /// word; it must already hold that letter. Every other letter must land on
    /// an empty or identical cell whose perpendicular neighbours are empty,
    /// and the cells directly before and after the word must be empty.
    pub(crate) fn fits(
        &self,
        letters: &[char],
        row: usize,
        col: usize,
        direction: Direction,
        crossing: Option<usize>,
    ) -> bool {
        let len = letters.len();
        if len == 0 || len > self.size {
            return false;
        }
        let (last_row, last_col) = direction.advance((row, col), len - 1);
        if last_row >= self.size || last_col >= self.size {
            return false;
        }

        let coverage = self.coverage(direction);
        for (k, &ch) in letters.iter().enumerate() {
            let (r, c) = direction.advance((row, col), k);
            if coverage[r * self.size + c] {
                return false;
            }
            let existing = self.letter(r, c);
            if crossing == Some(k) {
                if existing != Some(ch) {
                    return false;
                }
                continue;
            }
            if existing.is_some_and(|e| e != ch) {
                return false;
            }
            let neighbours_occupied = match direction {
                Direction::Across => {
                    (r > 0 && self.occupied(r - 1, c)) || self.occupied(r + 1, c)
                }
                Direction::Down => {
                    (c > 0 && self.occupied(r, c - 1)) || self.occupied(r, c + 1)
                }
            };
            if neighbours_occupied {
                return false;
            }
        }

        let before = match direction {
            Direction::Across => col.checked_sub(1).map(|c| (row, c)),
            Direction::Down => row.checked_sub(1).map(|r| (r, col)),
        };
        if before.is_some_and(|(r, c)| self.occupied(r, c)) {
            return false;
        }
        let (after_row, after_col) = direction.advance((last_row, last_col), 1);
        !self.occupied(after_row, after_col)
    }

    /// Commit a placement that passed [`GridBuilder::fits`] and number it.
    pub(crate) fn place(
        &mut self,
        entry: &WordEntry,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> &PlacedWord {
        let number = self.words.len() + 1;
        let placed = PlacedWord::new(entry, row, col, direction, number);
        for ((r, c), ch) in placed.cells() {
            let idx = r * self.size + c;
            self.cells[idx] = Some(ch);
            match direction {
                Direction::Across => self.across[idx] = true,
                Direction::Down => self.down[idx] = true,
            }
        }
        self.words.push(placed);
        &self.words[number - 1]
    }

    pub(crate) fn build(self) -> Grid {
        Grid {
            size: self.size,
            cells: self.cells,
            words: self.words,
        }
    }
}
