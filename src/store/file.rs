#![cfg(feature = "std")]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::{PlayerId, ProgressRecord, WordRecord};
use crate::engine::{normalize, WordEntry};
use crate::protocol::{ProgressSink, ScoreAggregator, WordSource};
use crate::store::default_entries;

/// On-disk encoding of a [`StoreDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Bincode,
}

impl StoreFormat {
    /// `.bin` files use bincode, everything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("bin") => StoreFormat::Bincode,
            _ => StoreFormat::Json,
        }
    }

    fn encode(self, doc: &StoreDocument) -> anyhow::Result<Vec<u8>> {
        match self {
            StoreFormat::Json => serde_json::to_vec_pretty(doc)
                .map_err(|e| anyhow::anyhow!("Serialization error: {}", e)),
            StoreFormat::Bincode => bincode::serialize(doc)
                .map_err(|e| anyhow::anyhow!("Serialization error: {}", e)),
        }
    }

    fn decode(self, bytes: &[u8]) -> anyhow::Result<StoreDocument> {
        match self {
            StoreFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e)),
            StoreFormat::Bincode => bincode::deserialize(bytes)
                .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e)),
        }
    }
}

/// Everything the file store keeps.
///
/// Progress is keyed by player id, then by puzzle index, both as strings so
/// the JSON form stays readable for the organizers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub puzzles: Vec<Vec<WordRecord>>,
    #[serde(default)]
    pub progress: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    /// Raw points reported per player id.
    #[serde(default)]
    pub scores: BTreeMap<String, i64>,
    /// Puzzle each player id is currently on.
    #[serde(default)]
    pub current: BTreeMap<String, u32>,
}

impl StoreDocument {
    fn words(&self, puzzle: u32) -> Vec<WordEntry> {
        let records = match self.puzzles.get(puzzle as usize) {
            Some(records) => records,
            None => return Vec::new(),
        };
        records
            .iter()
            .filter_map(|record| match WordEntry::try_from(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("skipping word row {:?} in puzzle {}: {}", record.word, puzzle, e);
                    None
                }
            })
            .collect()
    }

    fn advance(&mut self, player: PlayerId, puzzle: u32) {
        let current = self.current.entry(player.to_string()).or_insert(0);
        *current = (*current).max(puzzle);
    }
}

/// Word source, progress sink and score aggregator backed by a single file.
pub struct FileStore {
    path: PathBuf,
    format: StoreFormat,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = StoreFormat::from_path(&path);
        Self {
            path,
            format,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }

    /// Read the document; a missing file reads as empty.
    pub async fn load_document(&self) -> anyhow::Result<StoreDocument> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Replace the document on disk.
    pub async fn save_document(&self, doc: &StoreDocument) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        self.write(doc).await
    }

    /// Cross-game leaderboard points of `player`: one per `words_per_point`
    /// raw points.
    pub async fn leaderboard_points(&self, player: PlayerId, words_per_point: u32) -> anyhow::Result<i64> {
        let doc = self.load_document().await?;
        let raw = doc.scores.get(&player.to_string()).copied().unwrap_or(0);
        Ok(raw.max(0) / i64::from(words_per_point.max(1)))
    }

    async fn read(&self) -> anyhow::Result<StoreDocument> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(StoreDocument::default()),
            Ok(bytes) => self
                .format
                .decode(&bytes)
                .with_context(|| format!("Failed to parse store {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoreDocument::default()),
            Err(e) => Err(anyhow::anyhow!("Read error on {}: {}", self.path.display(), e)),
        }
    }

    async fn write(&self, doc: &StoreDocument) -> anyhow::Result<()> {
        let data = self.format.encode(doc)?;
        tokio::fs::write(&self.path, data)
            .await
            .with_context(|| format!("Failed to write store {}", self.path.display()))
    }
}

#[async_trait::async_trait]
impl WordSource for FileStore {
    async fn load_words(&self, puzzle: u32) -> anyhow::Result<Vec<WordEntry>> {
        let doc = self.load_document().await?;
        let words = doc.words(puzzle);
        if words.is_empty() && puzzle == 0 {
            log::info!("no words configured, using the built-in list");
            return Ok(default_entries());
        }
        Ok(words)
    }

    async fn load_progress(&self, player: PlayerId, puzzle: u32) -> anyhow::Result<Vec<String>> {
        let doc = self.load_document().await?;
        Ok(doc
            .progress
            .get(&player.to_string())
            .and_then(|by_puzzle| by_puzzle.get(&puzzle.to_string()))
            .map(|words| words.iter().map(|w| normalize(w)).collect())
            .unwrap_or_default())
    }

    async fn current_puzzle(&self, player: PlayerId) -> anyhow::Result<u32> {
        let doc = self.load_document().await?;
        Ok(doc.current.get(&player.to_string()).copied().unwrap_or(0))
    }
}

#[async_trait::async_trait]
impl ProgressSink for FileStore {
    async fn save_progress(&self, record: &ProgressRecord) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;
        doc.progress
            .entry(record.player.to_string())
            .or_default()
            .insert(record.puzzle.to_string(), record.guessed_words.clone());
        doc.advance(record.player, record.puzzle);
        self.write(&doc).await
    }

    async fn set_current_puzzle(&self, player: PlayerId, puzzle: u32) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;
        doc.advance(player, puzzle);
        self.write(&doc).await
    }
}

#[async_trait::async_trait]
impl ScoreAggregator for FileStore {
    async fn add_points(&self, player: PlayerId, delta: i64) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;
        *doc.scores.entry(player.to_string()).or_insert(0) += delta;
        self.write(&doc).await
    }
}
