use crate::engine::{WordEntry, DEFAULT_WORDS};

pub mod file;
pub mod in_memory;

/// Built-in word list served for puzzle 0 when nothing is configured.
pub fn default_entries() -> Vec<WordEntry> {
    DEFAULT_WORDS
        .iter()
        .filter_map(|(word, clue)| WordEntry::new(word, clue).ok())
        .collect()
}
