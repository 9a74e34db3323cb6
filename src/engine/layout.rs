//! Greedy crossword layout.
//!
//! Words are placed longest first. The first one is centred horizontally;
//! every following word must cross an already-placed word at a shared letter
//! and is committed at the first valid position found. Words with no valid
//! position are dropped.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::engine::config::GRID_SIZE;
use crate::engine::grid::{Grid, GridBuilder};
use crate::engine::word::{Direction, PlacedWord, WordEntry};

/// Lay out `entries` on a [`GRID_SIZE`] grid.
pub fn generate(entries: &[WordEntry]) -> Grid {
    generate_with_size(entries, GRID_SIZE)
}

/// Lay out `entries` on a `size`×`size` grid.
///
/// Deterministic for a given input order. Duplicate words are ignored after
/// their first occurrence.
pub fn generate_with_size(entries: &[WordEntry], size: usize) -> Grid {
    let mut builder = GridBuilder::new(size);

    let mut seen = BTreeSet::new();
    let mut ordered: Vec<&WordEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if seen.insert(entry.word()) {
            ordered.push(entry);
        } else {
            log::debug!("skipping duplicate crossword word {}", entry.word());
        }
    }
    // stable: equal lengths keep input order
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut remaining = ordered.into_iter();
    for entry in remaining.by_ref() {
        if place_seed(&mut builder, entry) {
            break;
        }
        log::debug!("word {} does not fit a {}x{} grid", entry.word(), size, size);
    }

    for entry in remaining {
        if !place_crossing(&mut builder, entry) {
            log::debug!("unable to place crossword word {}", entry.word());
        }
    }

    builder.build()
}

/// Entries from `entries` that do not appear in `grid`.
pub fn unplaced<'a>(entries: &'a [WordEntry], grid: &Grid) -> Vec<&'a WordEntry> {
    entries
        .iter()
        .filter(|e| !grid.contains_word(e.word()))
        .collect()
}

fn place_seed(builder: &mut GridBuilder, entry: &WordEntry) -> bool {
    let size = builder.size();
    let len = entry.len();
    if len > size {
        return false;
    }
    let row = size / 2;
    let col = (size - len) / 2;
    if !builder.fits(&entry.letters(), row, col, Direction::Across, None) {
        return false;
    }
    builder.place(entry, row, col, Direction::Across);
    true
}

fn place_crossing(builder: &mut GridBuilder, entry: &WordEntry) -> bool {
    let letters = entry.letters();
    if letters.len() > builder.size() {
        return false;
    }
    let found = builder.words().iter().find_map(|placed| {
        candidates(placed, &letters).find(|&(row, col, direction, i)| {
            builder.fits(&letters, row, col, direction, Some(i))
        })
    });
    match found {
        Some((row, col, direction, _)) => {
            builder.place(entry, row, col, direction);
            true
        }
        None => false,
    }
}

/// Perpendicular positions where `letters[i]` lands on a matching letter of
/// `placed`, in scan order: candidate index first, then placed index.
fn candidates<'a>(
    placed: &'a PlacedWord,
    letters: &'a [char],
) -> impl Iterator<Item = (usize, usize, Direction, usize)> + 'a {
    let (row, col) = placed.origin();
    let direction = placed.direction().perpendicular();
    letters.iter().enumerate().flat_map(move |(i, &ch)| {
        placed
            .cells()
            .enumerate()
            .filter(move |&(_, (_, other))| other == ch)
            .filter_map(move |(j, _)| {
                let (r, c) = match direction {
                    Direction::Down => (row.checked_sub(i)?, col + j),
                    Direction::Across => (row + j, col.checked_sub(i)?),
                };
                Some((r, c, direction, i))
            })
    })
}
