#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::engine::{GuessOutcome, PuzzleSession};

pub mod bot;
pub mod cli;

pub use bot::BotSolver;
pub use cli::CliSolver;

/// A candidate answer for the word numbered `number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub number: usize,
    pub candidate: String,
}

impl Guess {
    pub fn new(number: usize, candidate: impl Into<String>) -> Self {
        Self {
            number,
            candidate: candidate.into(),
        }
    }
}

/// Interface implemented by anything that answers clues.
pub trait Solver: Send {
    /// Next answer to submit, or `None` to stop playing.
    fn next_guess(&mut self, rng: &mut SmallRng, session: &PuzzleSession) -> Option<Guess>;

    /// Inform the solver of the outcome of its last guess.
    fn handle_outcome(&mut self, _guess: &Guess, _outcome: GuessOutcome) {}
}
