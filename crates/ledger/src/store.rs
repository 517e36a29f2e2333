//! JSON-file backed leaderboard.
//!
//! The file holds a pretty-printed array of `{"name": ..., "score": ...}`
//! records, best first. Loading is lenient: records with missing or mistyped
//! fields are dropped one by one instead of failing the whole file. Saving
//! writes a sibling `.tmp` file and renames it over the target, so a crash
//! mid-write leaves the previous leaderboard intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::ScoreStore;
use crate::error::LedgerResult;
use crate::path::default_scores_path;
use crate::types::{rank_entries, ScoreEntry};

/// On-disk record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Record {
    name: String,
    score: u32,
}

impl From<Record> for ScoreEntry {
    fn from(r: Record) -> Self {
        ScoreEntry::new(r.name, r.score)
    }
}

impl From<&ScoreEntry> for Record {
    fn from(e: &ScoreEntry) -> Self {
        Record {
            name: e.name.clone(),
            score: e.score,
        }
    }
}

/// Leaderboard persisted to a JSON file
#[derive(Debug, Clone)]
pub struct ScoreLedger {
    path: PathBuf,
}

impl ScoreLedger {
    /// Ledger stored at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ledger at `CHICKEN_SORT_SCORES` or the per-user data directory
    pub fn from_env() -> Self {
        Self::at(default_scores_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the leaderboard, reporting why it could not be read.
    ///
    /// A missing file is an error here; [`ScoreLedger::load`] maps it to an
    /// empty list.
    pub fn try_load(&self) -> LedgerResult<Vec<ScoreEntry>> {
        let bytes = fs::read(&self.path)?;
        let values: Vec<serde_json::Value> = serde_json::from_slice(&bytes)?;
        let total = values.len();
        let entries: Vec<ScoreEntry> = values
            .into_iter()
            .filter_map(|v| serde_json::from_value::<Record>(v).ok())
            .map(ScoreEntry::from)
            .collect();
        if entries.len() != total {
            debug!(
                dropped = total - entries.len(),
                path = %self.path.display(),
                "dropped malformed highscore records"
            );
        }
        Ok(rank_entries(entries))
    }

    /// Read the leaderboard; empty on any failure
    pub fn load(&self) -> Vec<ScoreEntry> {
        match self.try_load() {
            Ok(entries) => entries,
            Err(e) if e.is_missing() => Vec::new(),
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "could not read highscores");
                Vec::new()
            }
        }
    }

    /// Rank, cap and atomically write `entries`, returning what was stored
    pub fn try_save(&self, entries: Vec<ScoreEntry>) -> LedgerResult<Vec<ScoreEntry>> {
        let ranked = rank_entries(entries);
        let records: Vec<Record> = ranked.iter().map(Record::from).collect();
        let json = serde_json::to_string_pretty(&records)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        atomic_write(&self.path, json.as_bytes())?;
        Ok(ranked)
    }

    /// Best-effort save; a failure is logged and the entries are not stored
    pub fn save(&self, entries: Vec<ScoreEntry>) {
        if let Err(e) = self.try_save(entries) {
            warn!(error = %e, path = %self.path.display(), "could not save highscores");
        }
    }

    /// Load, append one entry, save
    pub fn try_add(&self, entry: ScoreEntry) -> LedgerResult<Vec<ScoreEntry>> {
        let mut entries = self.load();
        entries.push(entry);
        self.try_save(entries)
    }
}

impl ScoreStore for ScoreLedger {
    fn load(&self) -> Vec<ScoreEntry> {
        ScoreLedger::load(self)
    }

    fn add(&mut self, entry: ScoreEntry) {
        if let Err(e) = self.try_add(entry) {
            warn!(error = %e, path = %self.path.display(), "highscore not recorded");
        }
    }
}

fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes)?;
    match fs::rename(&tmp, path) {
        Ok(()) => Ok(()),
        Err(_) => {
            // Rename over an existing file can fail on some platforms.
            let copied = fs::copy(&tmp, path).map(|_| ());
            let _ = fs::remove_file(&tmp);
            copied
        }
    }
}
