//! Score ledger - the persisted top-10 leaderboard
//!
//! The core game only sees the [`ScoreStore`](chicken_sort_core::ScoreStore)
//! trait. This crate implements it on top of a JSON file in the per-user data
//! directory.
//!
//! Failures never reach gameplay: [`ScoreLedger::load`] returns an empty list
//! when the file is missing, unreadable or malformed, and a failed save is
//! logged and dropped. Callers that want to know why can use the `try_*`
//! variants, which return [`LedgerError`].
//!
//! # Environment Variables
//!
//! - `CHICKEN_SORT_SCORES`: explicit path of the leaderboard file
//! - `XDG_DATA_HOME` / `HOME` / `APPDATA`: base of the default location
//!
//! # Example
//!
//! ```no_run
//! use chicken_sort_ledger::ScoreLedger;
//! use chicken_sort_types::ScoreEntry;
//!
//! let ledger = ScoreLedger::from_env();
//! let top = ledger.try_add(ScoreEntry::new("ada", 130))?;
//! assert!(top.len() <= 10);
//! # Ok::<(), chicken_sort_ledger::LedgerError>(())
//! ```

pub mod error;
pub mod path;
pub mod store;

pub use chicken_sort_core as core;
pub use chicken_sort_types as types;

pub use error::{LedgerError, LedgerResult};
pub use path::{data_dir, default_scores_path, SCORES_PATH_ENV};
pub use store::ScoreLedger;
