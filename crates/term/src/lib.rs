//! Terminal rendering for the chicken board.
//!
//! Renders into a plain framebuffer that is flushed to the terminal as a diff
//! of changed cells. No widget toolkit in between.
//!
//! - `core` stays deterministic and testable; this crate only reads snapshots
//! - Board cells are 4 columns by 2 rows so tiles look roughly square
//! - The view also maps mouse positions back to grid anchors and menu buttons

pub mod effects;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use chicken_sort_core as core;
pub use chicken_sort_types as types;

pub use effects::{PopEffect, PopEffects};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FrameExtras, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
