#![cfg(feature = "std")]

use std::env;
use std::path::PathBuf;

use tokio::time::Duration;

use crate::engine::WORDS_PER_LEADERBOARD_POINT;
use crate::progress::DEFAULT_DEBOUNCE;

/// Default location of the file store.
pub const DEFAULT_STORE_PATH: &str = "crossword.json";

/// Runtime settings, read from `CROSSWORD_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// File backing the word lists and saved progress (`CROSSWORD_STORE`).
    pub store_path: PathBuf,
    /// Debounce window for progress writes (`CROSSWORD_DEBOUNCE_MS`).
    pub debounce: Duration,
    /// Solved words per leaderboard point (`CROSSWORD_WORDS_PER_POINT`).
    pub words_per_point: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            debounce: DEFAULT_DEBOUNCE,
            words_per_point: WORDS_PER_LEADERBOARD_POINT,
        }
    }
}

impl RuntimeConfig {
    /// Build from the process environment; unset variables keep defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup("CROSSWORD_STORE").filter(|p| !p.trim().is_empty()) {
            config.store_path = PathBuf::from(path.trim());
        }
        if let Some(ms) = lookup("CROSSWORD_DEBOUNCE_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                anyhow::anyhow!("CROSSWORD_DEBOUNCE_MS must be a number of milliseconds, got '{}'", ms)
            })?;
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(words) = lookup("CROSSWORD_WORDS_PER_POINT") {
            let words: u32 = words.trim().parse().map_err(|_| {
                anyhow::anyhow!("CROSSWORD_WORDS_PER_POINT must be a positive integer, got '{}'", words)
            })?;
            if words == 0 {
                return Err(anyhow::anyhow!("CROSSWORD_WORDS_PER_POINT must be at least 1"));
            }
            config.words_per_point = words;
        }
        Ok(config)
    }
}
