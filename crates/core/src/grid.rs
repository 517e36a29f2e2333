//! Grid module - the single source of truth for board state
//!
//! The grid is a 6x6 field where each cell is empty or holds a tile kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..5 (left to right), y ranges 0..5 (top to bottom)

use crate::types::{Cell, TileKind, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// The playfield - 6 columns x 6 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub(crate) fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i32 || y < 0 || y >= GRID_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false (and leaves the grid untouched) if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and empty
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell by flat index (row-major)
    pub(crate) fn cell_at_index(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    pub(crate) fn clear_index(&mut self, idx: usize) {
        self.cells[idx] = None;
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write the grid as a compact u8 matrix (0 = empty, kind id + 1 otherwise)
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = match self.cells[y * GRID_WIDTH as usize + x] {
                    Some(kind) => kind.id() + 1,
                    None => 0,
                };
            }
        }
    }

    /// Build a grid from text rows, one char per cell.
    ///
    /// `'0'..='3'` are tile ids, anything else (conventionally `'-'` or `'.'`) is
    /// empty. Missing rows/columns stay empty, extra ones are ignored.
    ///
    /// ```
    /// use chicken_sort_core::Grid;
    ///
    /// let grid = Grid::from_rows(&["00----", "------"]);
    /// assert!(grid.get(0, 0).unwrap().is_some());
    /// assert!(grid.is_empty_at(2, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate().take(GRID_HEIGHT as usize) {
            for (x, ch) in row.chars().enumerate().take(GRID_WIDTH as usize) {
                let cell = ch
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .and_then(TileKind::new);
                grid.set(x as i32, y as i32, cell);
            }
        }
        grid
    }

    /// Render one row back to the `from_rows` notation
    pub fn row_string(&self, y: i32) -> String {
        (0..GRID_WIDTH as i32)
            .map(|x| match self.get(x, y).flatten() {
                Some(kind) => char::from(b'0' + kind.id()),
                None => '-',
            })
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
