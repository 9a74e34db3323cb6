#![cfg(feature = "std")]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::{EntryError, WordEntry};

/// Telegram user id of a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who is playing which puzzle. Passed explicitly to every layer that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub player: PlayerId,
    /// Index of the word list the guest is solving.
    pub puzzle: u32,
}

impl SessionContext {
    pub fn new(player: PlayerId, puzzle: u32) -> Self {
        Self { player, puzzle }
    }
}

/// Unvalidated word row as stored by the organizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub clue: String,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
        }
    }
}

impl TryFrom<&WordRecord> for WordEntry {
    type Error = EntryError;

    fn try_from(record: &WordRecord) -> Result<Self, Self::Error> {
        WordEntry::new(&record.word, &record.clue)
    }
}

impl From<&WordEntry> for WordRecord {
    fn from(entry: &WordEntry) -> Self {
        WordRecord::new(entry.word(), entry.clue())
    }
}

/// Snapshot of solved words handed to the persistence sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub player: PlayerId,
    pub puzzle: u32,
    pub guessed_words: Vec<String>,
}

/// Outcome of a finished session, as reported by the binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveSummary {
    pub player: PlayerId,
    pub puzzle: u32,
    pub solved: usize,
    pub total: usize,
    pub guesses: usize,
}
