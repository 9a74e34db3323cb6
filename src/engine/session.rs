//! Puzzle session: solve state for one player over a generated grid.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::engine::common::GuessOutcome;
use crate::engine::grid::Grid;
use crate::engine::word::{normalize, Direction, PlacedWord};

/// Words a player has solved, upper-cased.
///
/// Only grows during a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveState {
    guessed_words: BTreeSet<String>,
}

impl SolveState {
    /// Number of solved words; one point each.
    pub fn score(&self) -> usize {
        self.guessed_words.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.guessed_words.contains(&normalize(word))
    }

    pub fn guessed_words(&self) -> &BTreeSet<String> {
        &self.guessed_words
    }

    /// Sorted copy handed to the persistence sink.
    pub fn snapshot(&self) -> Vec<String> {
        self.guessed_words.iter().cloned().collect()
    }

    fn insert(&mut self, word: &str) -> bool {
        self.guessed_words.insert(String::from(word))
    }
}

/// Cell the player is currently focused on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub row: usize,
    pub col: usize,
    /// Sequence number of the active word.
    pub number: usize,
}

/// Display state of a single cell, derived from the grid and solve state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct CellView {
    /// Letter shown to the player; only set once a covering word is solved.
    pub letter: Option<char>,
    /// Cell belongs to some word.
    pub filled: bool,
    pub selected: bool,
    pub in_active_word: bool,
    /// Cell belongs to a solved word.
    pub correct: bool,
    /// Sequence number of a word starting here.
    pub number: Option<usize>,
}

/// Projection of the whole grid for one interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GridView {
    size: usize,
    cells: Vec<CellView>,
}

impl GridView {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }
}

/// A player's progress on one grid.
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    grid: Grid,
    state: SolveState,
}

impl PuzzleSession {
    /// Start a session over `grid`, restoring previously solved words.
    ///
    /// Restored words that are not in the grid are ignored.
    pub fn initialize<I, S>(grid: Grid, guessed_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = SolveState::default();
        for word in guessed_words {
            let word = normalize(word.as_ref());
            if grid.contains_word(&word) {
                state.insert(&word);
            } else {
                log::debug!("ignoring stale solved word {}", word);
            }
        }
        Self { grid, state }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &SolveState {
        &self.state
    }

    pub fn score(&self) -> usize {
        self.state.score()
    }

    pub fn total_words(&self) -> usize {
        self.grid.len()
    }

    /// All placed words solved. An empty grid is never complete.
    pub fn is_complete(&self) -> bool {
        !self.grid.is_empty() && self.score() == self.total_words()
    }

    pub fn is_solved(&self, word: &PlacedWord) -> bool {
        self.state.contains(word.word())
    }

    /// Word selected by tapping (row, col): the first covering word in
    /// placement order.
    pub fn select_word(&self, row: usize, col: usize) -> Option<&PlacedWord> {
        self.grid.first_word_at(row, col)
    }

    /// Word running in `direction` through (row, col).
    pub fn select_word_in(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<&PlacedWord> {
        self.grid.word_at(row, col, direction)
    }

    /// Every word covering (row, col), for callers that let the player pick.
    pub fn words_at(&self, row: usize, col: usize) -> impl Iterator<Item = &PlacedWord> + '_ {
        self.grid.words_at(row, col)
    }

    /// Check `candidate` against `word`, ignoring case.
    ///
    /// A first correct answer marks the word solved; resubmitting a solved
    /// word reports `already_solved` and never changes the score. Wrong
    /// answers leave the state untouched.
    pub fn submit_guess(&mut self, word: &PlacedWord, candidate: &str) -> GuessOutcome {
        Self::check(&mut self.state, word, candidate)
    }

    /// [`PuzzleSession::submit_guess`] for the word numbered `number`.
    /// Returns `None` if no such word exists.
    pub fn submit_by_number(&mut self, number: usize, candidate: &str) -> Option<GuessOutcome> {
        let word = self.grid.word_by_number(number)?;
        Some(Self::check(&mut self.state, word, candidate))
    }

    fn check(state: &mut SolveState, word: &PlacedWord, candidate: &str) -> GuessOutcome {
        if state.contains(word.word()) {
            return GuessOutcome {
                correct: true,
                already_solved: true,
            };
        }
        if !word.matches(candidate) {
            return GuessOutcome::WRONG;
        }
        state.insert(word.word());
        GuessOutcome {
            correct: true,
            already_solved: false,
        }
    }

    /// Derive the per-cell display state for the current `selection`.
    pub fn view(&self, selection: Option<Selection>) -> GridView {
        let size = self.grid.size();
        let mut cells = Vec::with_capacity(size * size);
        let active = selection.and_then(|s| self.grid.word_by_number(s.number));
        for row in 0..size {
            for col in 0..size {
                let mut cell = CellView {
                    filled: self.grid.is_filled(row, col),
                    selected: selection.is_some_and(|s| s.row == row && s.col == col),
                    in_active_word: active.is_some_and(|w| w.covers(row, col)),
                    ..CellView::default()
                };
                for word in self.grid.words_at(row, col) {
                    if word.origin() == (row, col) && cell.number.is_none() {
                        cell.number = Some(word.number());
                    }
                    if self.is_solved(word) {
                        cell.correct = true;
                        cell.letter = self.grid.letter(row, col);
                    }
                }
                cells.push(cell);
            }
        }
        GridView { size, cells }
    }
}
