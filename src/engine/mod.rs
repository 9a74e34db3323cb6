//! Crossword engine (no_std compatible)
//!
//! Pure layout generation and solve-state tracking. Needs only `alloc` and
//! the `log` facade, so it can be compiled for WebAssembly next to the
//! Mini App front end.

pub mod common;
pub mod config;
pub mod grid;
pub mod layout;
pub mod session;
pub mod word;

// Re-export commonly used types
pub use common::{EntryError, GuessOutcome};
pub use config::*;
pub use grid::Grid;
pub use layout::{generate, generate_with_size, unplaced};
pub use session::{CellView, GridView, PuzzleSession, Selection, SolveState};
pub use word::{normalize, Direction, PlacedWord, WordEntry};
