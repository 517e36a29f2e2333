//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Key`]s and mouse events into
//! [`PointerAction`]s. Turning terminal cells into grid anchors is left to the
//! view, which knows where the board is drawn.

pub mod map;
pub mod pointer;

pub use chicken_sort_types as types;

pub use map::{map_key, should_quit};
pub use pointer::{PointerAction, PointerTracker};
