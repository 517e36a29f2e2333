//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and placement logic.
//! It has **zero dependencies** on terminal, file system, or clock I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 6x6 playfield, the single source of truth for board state
//! - [`pair`]: the two-tile falling piece and the placement validator
//! - [`rng`]: seeded pair generation
//! - [`resolver`]: run detection and clearing
//! - [`session`]: the phase state machine tying everything together
//! - [`scores`]: the leaderboard seam used when a round ends
//! - [`snapshot`]: read-only per-frame view for renderers
//!
//! # Game Rules
//!
//! - A pair is two adjacent tiles, horizontal or vertical, of random kinds
//! - A pair may only be placed fully inside the grid onto empty cells
//! - After each placement every horizontal or vertical run of three or more
//!   equal tiles is cleared; each cleared tile counts as one rescued chicken
//! - No gravity and no refill: cleared cells stay empty until reused
//! - Rescuing `goal` chickens wins; a next pair that fits nowhere loses
//!
//! # Example
//!
//! ```
//! use chicken_sort_core::{MemoryScores, Session};
//! use chicken_sort_types::{InputEvent, Key, Phase};
//!
//! let mut session = Session::new(12345, MemoryScores::new());
//! session.handle(InputEvent::Key(Key::Char('e')), 0);
//! assert_eq!(session.phase(), Phase::Playing);
//! assert_eq!(session.goal(), 128);
//!
//! // The top-left corner always fits on an empty grid.
//! session.handle(InputEvent::PointerDown { x: 0, y: 0 }, 0);
//! assert_eq!(session.moves(), 1);
//! ```

pub mod grid;
pub mod pair;
pub mod resolver;
pub mod rng;
pub mod scores;
pub mod session;
pub mod snapshot;

pub use chicken_sort_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use pair::{any_anchor_fits, can_place, Pair, Placement};
pub use resolver::{find_matches, resolve, MatchSet, Resolution};
pub use rng::{PairGenerator, SimpleRng};
pub use scores::{MemoryScores, ScoreStore};
pub use session::{Outcome, Position, Session};
pub use snapshot::GameSnapshot;
