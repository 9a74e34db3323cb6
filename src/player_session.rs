#![cfg(feature = "std")]

use std::sync::Arc;

use anyhow::Context;
use rand::rngs::SmallRng;
use tokio::task::JoinSet;
use tokio::time::Duration;

use crate::{
    domain::{PlayerId, ProgressRecord, SessionContext, SolveSummary},
    engine::{generate, GuessOutcome, PuzzleSession, POINTS_PER_WORD},
    player::Solver,
    progress::ProgressWriter,
    protocol::{ProgressSink, ScoreAggregator, WordSource},
};

/// One guest playing one puzzle, wired to its collaborators.
pub struct PlayerSession {
    context: SessionContext,
    session: PuzzleSession,
    writer: ProgressWriter,
    sink: Arc<dyn ProgressSink>,
    aggregator: Arc<dyn ScoreAggregator>,
    /// Point reports and puzzle moves not yet confirmed by the collaborators.
    pending: JoinSet<anyhow::Result<()>>,
    guesses: usize,
}

impl PlayerSession {
    /// Start `player` on the puzzle their progress points at.
    pub async fn resume(
        player: PlayerId,
        source: &dyn WordSource,
        sink: Arc<dyn ProgressSink>,
        aggregator: Arc<dyn ScoreAggregator>,
        debounce: Duration,
    ) -> anyhow::Result<Self> {
        let puzzle = source.current_puzzle(player).await?;
        Self::start(SessionContext::new(player, puzzle), source, sink, aggregator, debounce).await
    }

    /// Load the puzzle and the guest's saved progress, then lay out the grid.
    pub async fn start(
        context: SessionContext,
        source: &dyn WordSource,
        sink: Arc<dyn ProgressSink>,
        aggregator: Arc<dyn ScoreAggregator>,
        debounce: Duration,
    ) -> anyhow::Result<Self> {
        let entries = source.load_words(context.puzzle).await?;
        let saved = source.load_progress(context.player, context.puzzle).await?;
        let grid = generate(&entries);
        if grid.len() < entries.len() {
            log::info!(
                "puzzle {}: placed {} of {} words",
                context.puzzle,
                grid.len(),
                entries.len()
            );
        }
        let session = PuzzleSession::initialize(grid, saved);
        log::info!(
            "player {} resumes puzzle {} with {}/{} solved",
            context.player,
            context.puzzle,
            session.score(),
            session.total_words()
        );
        Ok(Self {
            context,
            session,
            writer: ProgressWriter::spawn(Arc::clone(&sink), debounce),
            sink,
            aggregator,
            pending: JoinSet::new(),
            guesses: 0,
        })
    }

    pub fn context(&self) -> SessionContext {
        self.context
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn guess_count(&self) -> usize {
        self.guesses
    }

    /// Submit an answer for the word numbered `number`.
    ///
    /// A new solve queues a progress snapshot and reports the points without
    /// waiting for either. Solving the last word also moves the guest on to
    /// the next puzzle. Returns `None` for an unknown clue number.
    pub fn submit(&mut self, number: usize, candidate: &str) -> Option<GuessOutcome> {
        let outcome = self.session.submit_by_number(number, candidate)?;
        self.guesses += 1;
        if outcome.is_new_solve() {
            self.writer.submit(ProgressRecord {
                player: self.context.player,
                puzzle: self.context.puzzle,
                guessed_words: self.session.state().snapshot(),
            });
            self.report_points();
            if self.session.is_complete() {
                self.advance_puzzle();
            }
        }
        Some(outcome)
    }

    fn report_points(&mut self) {
        let aggregator = Arc::clone(&self.aggregator);
        let player = self.context.player;
        self.pending.spawn(async move {
            aggregator
                .add_points(player, POINTS_PER_WORD)
                .await
                .with_context(|| format!("Failed to report points for player {}", player))
        });
    }

    fn advance_puzzle(&mut self) {
        let sink = Arc::clone(&self.sink);
        let SessionContext { player, puzzle } = self.context;
        let next = puzzle.saturating_add(1);
        log::info!("player {} finished puzzle {}, next is {}", player, puzzle, next);
        self.pending.spawn(async move {
            sink.set_current_puzzle(player, next)
                .await
                .with_context(|| format!("Failed to move player {} to puzzle {}", player, next))
        });
    }

    /// Let `solver` play until the puzzle is complete or it gives up.
    pub async fn run(&mut self, solver: &mut dyn Solver, rng: &mut SmallRng) -> anyhow::Result<()> {
        while !self.session.is_complete() {
            let guess = match solver.next_guess(rng, &self.session) {
                Some(guess) => guess,
                None => break,
            };
            match self.submit(guess.number, &guess.candidate) {
                Some(outcome) => solver.handle_outcome(&guess, outcome),
                None => log::warn!("solver picked unknown clue {}", guess.number),
            }
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Flush pending progress, wait for outstanding point reports and
    /// summarize the session. Failures are logged, never returned.
    pub async fn finish(mut self) -> SolveSummary {
        self.writer.finish().await;
        while let Some(joined) = self.pending.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::warn!("{:#}", e),
                Err(e) => log::warn!("collaborator task failed: {}", e),
            }
        }
        SolveSummary {
            player: self.context.player,
            puzzle: self.context.puzzle,
            solved: self.session.score(),
            total: self.session.total_words(),
            guesses: self.guesses,
        }
    }
}
