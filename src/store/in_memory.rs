#![cfg(feature = "std")]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{PlayerId, ProgressRecord};
use crate::engine::{normalize, WordEntry, WORDS_PER_LEADERBOARD_POINT};
use crate::protocol::{ProgressSink, ScoreAggregator, WordSource};
use crate::store::default_entries;

struct Inner {
    puzzles: BTreeMap<u32, Vec<WordEntry>>,
    progress: BTreeMap<(PlayerId, u32), Vec<String>>,
    solved: BTreeMap<PlayerId, i64>,
    current: BTreeMap<PlayerId, u32>,
    saves: usize,
    fail_writes: bool,
    words_per_point: u32,
}

/// Word source, progress sink and score aggregator kept in memory.
///
/// Clones share the same state.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_words_per_point(WORDS_PER_LEADERBOARD_POINT)
    }

    pub fn with_words_per_point(words_per_point: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                puzzles: BTreeMap::new(),
                progress: BTreeMap::new(),
                solved: BTreeMap::new(),
                current: BTreeMap::new(),
                saves: 0,
                fail_writes: false,
                words_per_point: words_per_point.max(1),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_puzzle(&self, puzzle: u32, entries: Vec<WordEntry>) {
        self.lock().puzzles.insert(puzzle, entries);
    }

    pub fn set_progress(&self, player: PlayerId, puzzle: u32, words: Vec<String>) {
        self.lock().progress.insert((player, puzzle), words);
    }

    /// Put `player` on `puzzle`, in either direction.
    pub fn set_current(&self, player: PlayerId, puzzle: u32) {
        self.lock().current.insert(player, puzzle);
    }

    /// Last stored solved words of `player` in `puzzle`.
    pub fn progress(&self, player: PlayerId, puzzle: u32) -> Option<Vec<String>> {
        self.lock().progress.get(&(player, puzzle)).cloned()
    }

    /// Number of successful `save_progress` calls.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Make every subsequent write fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Raw points received for `player`.
    pub fn raw_points(&self, player: PlayerId) -> i64 {
        self.lock().solved.get(&player).copied().unwrap_or(0)
    }

    /// Cross-game leaderboard points: one per `words_per_point` solved words.
    pub fn leaderboard_points(&self, player: PlayerId) -> i64 {
        let inner = self.lock();
        let raw = inner.solved.get(&player).copied().unwrap_or(0);
        raw.max(0) / i64::from(inner.words_per_point)
    }
}

impl Inner {
    fn advance(&mut self, player: PlayerId, puzzle: u32) {
        let current = self.current.entry(player).or_insert(0);
        *current = (*current).max(puzzle);
    }
}

#[async_trait::async_trait]
impl WordSource for InMemoryStore {
    async fn load_words(&self, puzzle: u32) -> anyhow::Result<Vec<WordEntry>> {
        let inner = self.lock();
        match inner.puzzles.get(&puzzle) {
            Some(entries) if !entries.is_empty() => Ok(entries.clone()),
            _ if puzzle == 0 => Ok(default_entries()),
            _ => Ok(Vec::new()),
        }
    }

    async fn load_progress(&self, player: PlayerId, puzzle: u32) -> anyhow::Result<Vec<String>> {
        let inner = self.lock();
        Ok(inner
            .progress
            .get(&(player, puzzle))
            .map(|words| words.iter().map(|w| normalize(w)).collect())
            .unwrap_or_default())
    }

    async fn current_puzzle(&self, player: PlayerId) -> anyhow::Result<u32> {
        Ok(self.lock().current.get(&player).copied().unwrap_or(0))
    }
}

#[async_trait::async_trait]
impl ProgressSink for InMemoryStore {
    async fn save_progress(&self, record: &ProgressRecord) -> anyhow::Result<()> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(anyhow::anyhow!("in-memory store rejects writes"));
        }
        inner
            .progress
            .insert((record.player, record.puzzle), record.guessed_words.clone());
        inner.advance(record.player, record.puzzle);
        inner.saves += 1;
        Ok(())
    }

    async fn set_current_puzzle(&self, player: PlayerId, puzzle: u32) -> anyhow::Result<()> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(anyhow::anyhow!("in-memory store rejects writes"));
        }
        inner.advance(player, puzzle);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ScoreAggregator for InMemoryStore {
    async fn add_points(&self, player: PlayerId, delta: i64) -> anyhow::Result<()> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(anyhow::anyhow!("in-memory store rejects writes"));
        }
        *inner.solved.entry(player).or_insert(0) += delta;
        Ok(())
    }
}
