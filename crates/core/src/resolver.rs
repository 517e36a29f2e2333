//! Match resolver - clears runs of three or more equal tiles
//!
//! Each pass scans rows left to right and columns top to bottom, collecting
//! every cell that belongs to a run of at least [`MIN_RUN`] equal, non-empty
//! tiles. The two axes are unioned into one [`MatchSet`], so a cell that sits
//! on a horizontal and a vertical run at the same time is cleared (and counted)
//! once. Cleared cells become empty; there is no gravity and no refill.
//!
//! Passes repeat until one finds nothing. With the current rules a second pass
//! can never match (clearing only creates empty cells), but the loop is kept so
//! cascades work if refill or gravity are ever added.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Cell, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH, MIN_RUN};

const _: () = assert!(GRID_CELLS <= 64, "MatchSet stores one bit per cell");

/// Set of grid coordinates, one bit per cell (row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchSet {
    bits: u64,
}

impl MatchSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Insert (x, y); out-of-grid coordinates are ignored
    pub fn insert(&mut self, x: i32, y: i32) {
        if let Some(idx) = Grid::index(x, y) {
            self.bits |= 1u64 << idx;
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        Grid::index(x, y).is_some_and(|idx| self.bits & (1u64 << idx) != 0)
    }

    pub fn union(self, other: MatchSet) -> MatchSet {
        MatchSet {
            bits: self.bits | other.bits,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Coordinates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> {
        let bits = self.bits;
        (0..GRID_CELLS)
            .filter(move |&idx| bits & (1u64 << idx) != 0)
            .map(|idx| {
                (
                    (idx % GRID_WIDTH as usize) as u8,
                    (idx / GRID_WIDTH as usize) as u8,
                )
            })
    }

    fn indices(&self) -> impl Iterator<Item = usize> {
        let bits = self.bits;
        (0..GRID_CELLS).filter(move |&idx| bits & (1u64 << idx) != 0)
    }
}

/// Result of resolving a grid until it is stable
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Every cleared cell, pass by pass, row-major within a pass
    pub cleared: ArrayVec<(u8, u8), GRID_CELLS>,
    /// Number of cleared cells (equals `cleared.len()`)
    pub total: u32,
    /// Passes that cleared something
    pub passes: u32,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Scan one line of cells for runs, reporting each qualifying run as
/// `(start, len)` in line positions.
fn scan_line(len: usize, cell: impl Fn(usize) -> Cell, mut hit: impl FnMut(usize, usize)) {
    let mut run_start = 0;
    let mut run_len = 1;
    // Walk one past the end so the final run is flushed like any other break.
    for i in 1..=len {
        let continues = i < len && cell(i).is_some() && cell(i) == cell(i - 1);
        if continues {
            run_len += 1;
            continue;
        }
        if run_len >= MIN_RUN && cell(run_start).is_some() {
            hit(run_start, run_len);
        }
        run_start = i;
        run_len = 1;
    }
}

/// Cells on horizontal runs
pub fn find_horizontal(grid: &Grid) -> MatchSet {
    let mut set = MatchSet::new();
    for y in 0..GRID_HEIGHT as i32 {
        scan_line(
            GRID_WIDTH as usize,
            |x| grid.get(x as i32, y).flatten(),
            |start, len| {
                for x in start..start + len {
                    set.insert(x as i32, y);
                }
            },
        );
    }
    set
}

/// Cells on vertical runs
pub fn find_vertical(grid: &Grid) -> MatchSet {
    let mut set = MatchSet::new();
    for x in 0..GRID_WIDTH as i32 {
        scan_line(
            GRID_HEIGHT as usize,
            |y| grid.get(x, y as i32).flatten(),
            |start, len| {
                for y in start..start + len {
                    set.insert(x, y as i32);
                }
            },
        );
    }
    set
}

/// Union of horizontal and vertical matches for one pass
pub fn find_matches(grid: &Grid) -> MatchSet {
    find_horizontal(grid).union(find_vertical(grid))
}

/// Clear matches until the grid is stable.
///
/// The grid is left without any run of [`MIN_RUN`] or more equal tiles.
/// A stable grid is returned untouched with an empty resolution.
pub fn resolve(grid: &mut Grid) -> Resolution {
    let mut out = Resolution::default();
    loop {
        let matches = find_matches(grid);
        if matches.is_empty() {
            break;
        }
        for idx in matches.indices() {
            debug_assert!(grid.cell_at_index(idx).is_some());
            grid.clear_index(idx);
        }
        // A cell is cleared at most once, so at most GRID_CELLS coordinates.
        for coord in matches.iter() {
            if out.cleared.try_push(coord).is_err() {
                break;
            }
        }
        out.total += matches.len() as u32;
        out.passes += 1;
    }
    out
}
