//! Tracing setup.
//!
//! The terminal is in raw mode while the game runs, so events go to a file and
//! never to stdout/stderr. Without a filter no subscriber is installed and every
//! `tracing` macro is a no-op.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber if logging is configured.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(filter) = config.log_filter.as_deref() else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter {filter:?}"))?;

    if let Some(dir) = config.log_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("opening log file {}", config.log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(true)
}
