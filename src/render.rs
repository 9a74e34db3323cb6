#![cfg(feature = "std")]
//! Plain-text rendering of a puzzle for the terminal.

use std::fmt::Write;

use crate::engine::{Direction, Grid, GridView, PuzzleSession};

/// Render the grid projection. Rows and columns are numbered from 1.
///
/// `#` marks cells outside every word, `_` an unsolved letter, `*` the
/// selected unsolved cell and `+` other unsolved cells of the active word.
pub fn format_grid(view: &GridView) -> String {
    let size = view.size();
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..size {
        let _ = write!(out, "{:>3}", col + 1);
    }
    out.push('\n');
    for row in 0..size {
        let _ = write!(out, "{:>3}", row + 1);
        for col in 0..size {
            let ch = match view.cell(row, col) {
                Some(cell) if !cell.filled => '#',
                Some(cell) => match cell.letter {
                    Some(letter) => letter,
                    None if cell.selected => '*',
                    None if cell.in_active_word => '+',
                    None => '_',
                },
                None => '#',
            };
            let _ = write!(out, "{:>3}", ch);
        }
        out.push('\n');
    }
    out
}

/// Render the numbered clue list with solve marks.
pub fn format_clues(session: &PuzzleSession) -> String {
    let mut out = String::new();
    for word in session.grid().words() {
        let (row, col) = word.origin();
        let direction = match word.direction() {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        let mark = if session.is_solved(word) { " ✓" } else { "" };
        let _ = writeln!(
            out,
            "{:>2}. {:<6} ({}, {}) {} [{}]{}",
            word.number(),
            direction,
            row + 1,
            col + 1,
            word.clue(),
            word.len(),
            mark
        );
    }
    out
}

/// Render the grid with every letter revealed.
pub fn format_solution(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let _ = write!(out, "{:>2}", grid.letter(row, col).unwrap_or('.'));
        }
        out.push('\n');
    }
    out
}
