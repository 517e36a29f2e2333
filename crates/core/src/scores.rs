//! Score store seam
//!
//! The session only needs to read the leaderboard and append to it when a
//! round ends. Persistence lives elsewhere; anything that can do those two
//! things can back a session.

use crate::types::{rank_entries, ScoreEntry};

/// Leaderboard backing a session.
///
/// Both operations are best effort: a store that cannot read returns an empty
/// list, and one that cannot write drops the entry. Neither may disturb the game.
pub trait ScoreStore {
    /// Current leaderboard, best first
    fn load(&self) -> Vec<ScoreEntry>;

    /// Record a finished round
    fn add(&mut self, entry: ScoreEntry);
}

/// In-memory leaderboard (tests, headless runs)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScores {
    entries: Vec<ScoreEntry>,
}

impl MemoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<ScoreEntry>) -> Self {
        Self {
            entries: rank_entries(entries),
        }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }
}

impl ScoreStore for MemoryScores {
    fn load(&self) -> Vec<ScoreEntry> {
        self.entries.clone()
    }

    fn add(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        self.entries = rank_entries(std::mem::take(&mut self.entries));
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn load(&self) -> Vec<ScoreEntry> {
        (**self).load()
    }

    fn add(&mut self, entry: ScoreEntry) {
        (**self).add(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HIGHSCORE_CAPACITY;

    #[test]
    fn memory_scores_stay_ranked_and_capped() {
        let mut store = MemoryScores::new();
        for i in 0..12u32 {
            store.add(ScoreEntry::new(format!("p{i}"), i));
        }
        let entries = store.load();
        assert_eq!(entries.len(), HIGHSCORE_CAPACITY);
        assert_eq!(entries[0].score, 11);
        assert_eq!(entries.last().map(|e| e.score), Some(2));
    }
}
