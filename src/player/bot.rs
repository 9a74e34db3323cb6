use rand::rngs::SmallRng;
use rand::Rng;

use crate::engine::PuzzleSession;

use super::{Guess, Solver};

/// Guesses a bot makes before giving up.
pub const DEFAULT_PATIENCE: usize = 200;

/// Automated guest that answers a random unsolved clue, correctly with
/// probability `accuracy`, and stops after `patience` guesses.
pub struct BotSolver {
    accuracy: f64,
    patience: usize,
}

impl BotSolver {
    pub fn new(accuracy: f64) -> Self {
        Self::with_patience(accuracy, DEFAULT_PATIENCE)
    }

    pub fn with_patience(accuracy: f64, patience: usize) -> Self {
        let accuracy = if accuracy.is_nan() { 0.0 } else { accuracy.clamp(0.0, 1.0) };
        Self { accuracy, patience }
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
}

impl Default for BotSolver {
    fn default() -> Self {
        Self::new(0.7)
    }
}

/// A plausible wrong answer: the word without its last letter.
fn misspell(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.pop();
    letters.into_iter().collect()
}

impl Solver for BotSolver {
    fn next_guess(&mut self, rng: &mut SmallRng, session: &PuzzleSession) -> Option<Guess> {
        let open: Vec<_> = session
            .grid()
            .words()
            .iter()
            .filter(|w| !session.is_solved(w))
            .collect();
        if open.is_empty() || self.patience == 0 {
            return None;
        }
        self.patience -= 1;
        let word = open[rng.random_range(0..open.len())];
        let candidate = if rng.random_bool(self.accuracy) {
            word.word().to_lowercase()
        } else {
            misspell(word.word())
        };
        Some(Guess::new(word.number(), candidate))
    }
}
