//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, score persistence).
//!
//! # Grid Dimensions
//!
//! The reference playfield is a 6x6 grid:
//!
//! - **Width**: 6 columns (indexed 0-5)
//! - **Height**: 6 rows (indexed 0-5)
//! - **Tile kinds**: 4 chicken breeds (ids 0-3)
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLACE_DEBOUNCE_MS` | 100 | Minimum interval between accepted placements |
//! | `MIN_RUN` | 3 | Shortest run of equal tiles that clears |
//! | `HIGHSCORE_CAPACITY` | 10 | Entries kept in the leaderboard |
//! | `NAME_MAX_CHARS` | 16 | Longest accepted player name |
//! | `POP_EFFECT_MS` | 220 | Lifetime of the clear feedback effect |
//!
//! # Examples
//!
//! ```
//! use chicken_sort_types::{Difficulty, Orientation, TileKind, GRID_WIDTH};
//!
//! let kind = TileKind::new(2).unwrap();
//! assert_eq!(kind.id(), 2);
//! assert!(TileKind::new(4).is_none());
//!
//! assert_eq!(Orientation::Horizontal.second_offset(), (1, 0));
//! assert_eq!(Difficulty::from_hotkey('m'), Some(Difficulty::Medium));
//! assert_eq!(Difficulty::Medium.goal(), 256);
//! assert_eq!(GRID_WIDTH, 6);
//! ```

/// Grid width in cells (6 columns)
pub const GRID_WIDTH: u8 = 6;

/// Grid height in cells (6 rows)
pub const GRID_HEIGHT: u8 = 6;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Number of distinct tile kinds
pub const TILE_KINDS: u8 = 4;

/// Shortest run that is cleared by the resolver
pub const MIN_RUN: usize = 3;

/// Minimum interval between two accepted placements
pub const PLACE_DEBOUNCE_MS: u64 = 100;

/// Leaderboard size
pub const HIGHSCORE_CAPACITY: usize = 10;

/// Longest name accepted during name entry
pub const NAME_MAX_CHARS: usize = 16;

/// Lifetime of a clear feedback effect
pub const POP_EFFECT_MS: u32 = 220;


/// One of the chicken breeds that can occupy a cell.
///
/// Wraps the type id in `[0, TILE_KINDS)`; the constructor rejects anything else
/// so a grid cell can never hold an invalid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKind(u8);

impl TileKind {
    /// Build a tile kind from its id, `None` if the id is out of range.
    pub const fn new(id: u8) -> Option<Self> {
        if id < TILE_KINDS {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Build a tile kind from any id, reduced modulo `TILE_KINDS`
    pub const fn wrapping(id: u8) -> Self {
        Self(id % TILE_KINDS)
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    /// All tile kinds in id order.
    pub fn all() -> impl Iterator<Item = TileKind> {
        (0..TILE_KINDS).map(TileKind)
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(TileKind)`: Cell occupied by a chicken of that kind
pub type Cell = Option<TileKind>;

/// Orientation of a falling pair.
///
/// The first tile always sits on the anchor; the second one is to the right
/// (horizontal) or below (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Offset of the second tile relative to the anchor
    pub const fn second_offset(self) -> (i8, i8) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Session phase
///
/// The lifecycle goes: Menu → Playing → GameOver | Victory → EnteringName →
/// Highscore → Menu. GameOver and Victory may also return straight to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Playing,
    GameOver,
    Victory,
    EnteringName,
    Highscore,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::GameOver => "gameover",
            Phase::Victory => "victory",
            Phase::EnteringName => "enter_name",
            Phase::Highscore => "highscore",
        }
    }

    /// True while the board is shown (playing or one of its end overlays)
    pub fn shows_board(&self) -> bool {
        matches!(
            self,
            Phase::Playing | Phase::GameOver | Phase::Victory | Phase::EnteringName
        )
    }
}

/// Goal tiers offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of rescued chickens needed to win
    pub const fn goal(self) -> u32 {
        match self {
            Difficulty::Easy => 128,
            Difficulty::Medium => 256,
            Difficulty::Hard => 512,
        }
    }

    pub const fn hotkey(self) -> char {
        match self {
            Difficulty::Easy => 'e',
            Difficulty::Medium => 'm',
            Difficulty::Hard => 'h',
        }
    }

    /// Parse a menu hotkey (case-insensitive)
    pub fn from_hotkey(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'e' => Some(Difficulty::Easy),
            'm' => Some(Difficulty::Medium),
            'h' => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hardcore",
        }
    }
}

/// Clickable entries on the main menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Start(Difficulty),
    Highscores,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Start(Difficulty::Easy),
        MenuItem::Start(Difficulty::Medium),
        MenuItem::Start(Difficulty::Hard),
        MenuItem::Highscores,
    ];

    /// Key that triggers the same action as clicking the button
    pub const fn hotkey(self) -> char {
        match self {
            MenuItem::Start(d) => d.hotkey(),
            MenuItem::Highscores => 's',
        }
    }
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

/// Discrete input consumed by the session state machine.
///
/// Pointer coordinates are grid anchors, already translated from screen
/// coordinates by the caller. They may lie outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over an anchor
    PointerDown { x: i32, y: i32 },
    /// Pointer dragged while the button is held (first drag of a gesture)
    PointerDrag { x: i32, y: i32 },
    /// Key pressed
    Key(Key),
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Sort entries by score (descending) and keep the top `HIGHSCORE_CAPACITY`.
///
/// The sort is stable, so among equal scores the earlier entry ranks first.
pub fn rank_entries(mut entries: Vec<ScoreEntry>) -> Vec<ScoreEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(HIGHSCORE_CAPACITY);
    entries
}
