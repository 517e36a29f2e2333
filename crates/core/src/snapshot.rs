use arrayvec::ArrayVec;

use crate::pair::Pair;
use crate::types::{Phase, ScoreEntry, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Read-only view of a session handed to the renderer each frame.
///
/// `grid` uses 0 for empty and `kind id + 1` for occupied cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub current: Option<Pair>,
    pub next: Option<Pair>,
    pub rescued: u32,
    pub goal: u32,
    pub moves: u32,
    pub phase: Phase,
    pub name_input: String,
    pub highscores: Vec<ScoreEntry>,
    /// Cells cleared by the most recent placement
    pub last_cleared: ArrayVec<(u8, u8), GRID_CELLS>,
    pub round_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.current = None;
        self.next = None;
        self.rescued = 0;
        self.goal = 0;
        self.moves = 0;
        self.phase = Phase::Menu;
        self.name_input.clear();
        self.highscores.clear();
        self.last_cleared.clear();
        self.round_id = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Cell value at (x, y), `None` when out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        self.grid
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            current: None,
            next: None,
            rescued: 0,
            goal: 0,
            moves: 0,
            phase: Phase::Menu,
            name_input: String::new(),
            highscores: Vec::new(),
            last_cleared: ArrayVec::new(),
            round_id: 0,
            seed: 0,
        }
    }
}
