//! Runtime configuration read once at startup.
//!
//! # Environment Variables
//!
//! - `CHICKEN_SORT_SEED`: RNG seed for pair generation (default: derived from the clock)
//! - `CHICKEN_SORT_SCORES`: leaderboard file (default: per-user data directory)
//! - `CHICKEN_SORT_LOG`: tracing filter directive, e.g. `debug` or `chicken_sort_core=debug`
//! - `CHICKEN_SORT_LOG_FILE`: log file (default: `chicken-sort.log` next to the leaderboard)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ledger::default_scores_path;

pub const SEED_ENV: &str = "CHICKEN_SORT_SEED";
pub const LOG_ENV: &str = "CHICKEN_SORT_LOG";
pub const LOG_FILE_ENV: &str = "CHICKEN_SORT_LOG_FILE";

const LOG_FILE_NAME: &str = "chicken-sort.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub scores_path: PathBuf,
    /// Tracing filter; logging is off when `None`
    pub log_filter: Option<String>,
    pub log_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), default_scores_path())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// `scores_path` comes from the ledger crate, which owns that lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>, scores_path: PathBuf) -> Self {
        let non_empty = |key: &str| {
            var(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty(SEED_ENV)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = non_empty(LOG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| match scores_path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir.join(LOG_FILE_NAME),
                _ => PathBuf::from(LOG_FILE_NAME),
            });

        Self {
            seed,
            scores_path,
            log_filter: non_empty(LOG_ENV),
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (nanos >> 32)) as u32
}
