//! Sort the Chickens (workspace facade crate).
//!
//! Re-exports the member crates under `chicken_sort::{core,input,ledger,term,types}`
//! and hosts the binary's startup pieces (`config`, `logging`).

pub use chicken_sort_core as core;
pub use chicken_sort_input as input;
pub use chicken_sort_ledger as ledger;
pub use chicken_sort_term as term;
pub use chicken_sort_types as types;

pub mod config;
pub mod logging;
