use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::engine::{GuessOutcome, PuzzleSession, Selection};
use crate::render::{format_clues, format_grid};

use super::{Guess, Solver};

/// Guest answering from the terminal.
pub struct CliSolver {
    selection: Option<Selection>,
}

impl CliSolver {
    pub fn new() -> Self {
        Self { selection: None }
    }
}

impl Default for CliSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `<number> <answer>`. `Ok(None)` means the player wants to quit.
pub fn parse_guess(input: &str) -> Result<Option<Guess>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(None);
    }
    let mut parts = input.split_whitespace();
    let number_str = parts.next().ok_or("No clue number")?;
    let number: usize = number_str
        .parse()
        .map_err(|_| format!("Invalid clue number '{}'", number_str))?;
    let answer = parts.next().ok_or("Missing answer - enter e.g. '3 ТОРТ'")?;
    if parts.next().is_some() {
        return Err("Answer must be a single word".to_string());
    }
    Ok(Some(Guess::new(number, answer)))
}

impl Solver for CliSolver {
    fn next_guess(&mut self, _rng: &mut SmallRng, session: &PuzzleSession) -> Option<Guess> {
        let stdin = io::stdin();
        loop {
            println!();
            print!("{}", format_grid(&session.view(self.selection)));
            println!();
            print!("{}", format_clues(session));
            println!("Solved {}/{}", session.score(), session.total_words());
            print!("Enter '<number> <answer>' or 'q' to quit: ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read answer: {}", e);
                    return None;
                }
            }

            match parse_guess(&line) {
                Ok(Some(guess)) => match session.grid().word_by_number(guess.number) {
                    Some(word) => {
                        let (row, col) = word.origin();
                        self.selection = Some(Selection {
                            row,
                            col,
                            number: guess.number,
                        });
                        return Some(guess);
                    }
                    None => println!("✗ There is no clue number {}", guess.number),
                },
                Ok(None) => return None,
                Err(e) => println!("✗ {}", e),
            }
        }
    }

    fn handle_outcome(&mut self, guess: &Guess, outcome: GuessOutcome) {
        if outcome.already_solved {
            println!("✓ Clue {} is already solved", guess.number);
        } else if outcome.correct {
            println!("✓ Correct! {} it is", guess.candidate.to_uppercase());
        } else {
            println!("✗ '{}' is not it, try again", guess.candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_and_answer() {
        assert_eq!(parse_guess(" 3 торт \n"), Ok(Some(Guess::new(3, "торт"))));
    }

    #[test]
    fn quit_commands() {
        assert_eq!(parse_guess("q"), Ok(None));
        assert_eq!(parse_guess("QUIT"), Ok(None));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_guess("").is_err());
        assert!(parse_guess("x ТОРТ").is_err());
        assert!(parse_guess("3").is_err());
        assert!(parse_guess("3 ТОРТ ТОСТ").is_err());
    }
}
