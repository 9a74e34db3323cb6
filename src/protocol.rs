#![cfg(feature = "std")]
//! Contracts of the collaborators around a puzzle session.

use crate::domain::{PlayerId, ProgressRecord};
use crate::engine::WordEntry;

/// Supplies word lists and previously persisted progress.
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Word/clue pairs of puzzle `puzzle`.
    async fn load_words(&self, puzzle: u32) -> anyhow::Result<Vec<WordEntry>>;

    /// Words `player` had solved in `puzzle`.
    async fn load_progress(&self, player: PlayerId, puzzle: u32) -> anyhow::Result<Vec<String>>;

    /// Puzzle `player` is currently on; 0 for a new guest.
    async fn current_puzzle(&self, player: PlayerId) -> anyhow::Result<u32>;
}

/// Durably stores solved-word sets.
#[async_trait::async_trait]
pub trait ProgressSink: Send + Sync {
    /// Store the solved words of one puzzle. Also moves the guest's current
    /// puzzle up to `record.puzzle` if it is behind.
    async fn save_progress(&self, record: &ProgressRecord) -> anyhow::Result<()>;

    /// Move `player` to `puzzle`. Never moves backwards.
    async fn set_current_puzzle(&self, player: PlayerId, puzzle: u32) -> anyhow::Result<()>;
}

/// Owns cross-game point conversion and ranking.
#[async_trait::async_trait]
pub trait ScoreAggregator: Send + Sync {
    async fn add_points(&self, player: PlayerId, delta: i64) -> anyhow::Result<()>;
}
