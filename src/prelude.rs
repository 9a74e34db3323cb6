//! Commonly used types and utilities for ease of import.

pub use crate::{generate, Direction, Grid, GuessOutcome, PlacedWord, PuzzleSession, WordEntry};

#[cfg(feature = "std")]
pub use crate::{
    BotSolver, FileStore, InMemoryStore, PlayerId, PlayerSession, ProgressSink, ScoreAggregator,
    SessionContext, Solver, WordSource,
};
