//! Where the leaderboard lives on disk.

use std::ffi::OsString;
use std::path::PathBuf;

/// Explicit override for the leaderboard file
pub const SCORES_PATH_ENV: &str = "CHICKEN_SORT_SCORES";

const APP_DIR: &str = "chicken-sort";
const FILE_NAME: &str = "highscores.json";

/// Per-user data directory for the game, if one can be determined.
///
/// `$XDG_DATA_HOME/chicken-sort`, then `$HOME/.local/share/chicken-sort`,
/// then `%APPDATA%\chicken-sort`.
pub fn data_dir() -> Option<PathBuf> {
    data_dir_from(|key| std::env::var_os(key))
}

/// Leaderboard file path from the process environment
pub fn default_scores_path() -> PathBuf {
    scores_path_from(|key| std::env::var_os(key))
}

pub(crate) fn data_dir_from(var: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    let non_empty = |key: &str| var(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    let base = non_empty("XDG_DATA_HOME")
        .or_else(|| non_empty("HOME").map(|home| home.join(".local").join("share")))
        .or_else(|| non_empty("APPDATA"))?;
    Some(base.join(APP_DIR))
}

pub(crate) fn scores_path_from(var: impl Fn(&str) -> Option<OsString>) -> PathBuf {
    if let Some(explicit) = var(SCORES_PATH_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(explicit);
    }
    match data_dir_from(var) {
        Some(dir) => dir.join(FILE_NAME),
        None => PathBuf::from(FILE_NAME),
    }
}
