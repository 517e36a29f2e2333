//! Pair module - the two-tile falling piece and the placement validator

use crate::grid::Grid;
use crate::types::{Orientation, TileKind, GRID_HEIGHT, GRID_WIDTH};

/// One tile of a pair, relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub dx: i8,
    pub dy: i8,
    pub kind: TileKind,
}

/// Two adjacent tiles placed together.
///
/// The first tile sits on the anchor, the second one is offset by
/// [`Orientation::second_offset`]. Pairs are immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    orientation: Orientation,
    kinds: [TileKind; 2],
}

impl Pair {
    pub fn new(orientation: Orientation, kinds: [TileKind; 2]) -> Self {
        Self { orientation, kinds }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn kinds(&self) -> [TileKind; 2] {
        self.kinds
    }

    /// Both tiles with their offsets from the anchor
    pub fn placements(&self) -> [Placement; 2] {
        let (dx, dy) = self.orientation.second_offset();
        [
            Placement {
                dx: 0,
                dy: 0,
                kind: self.kinds[0],
            },
            Placement {
                dx,
                dy,
                kind: self.kinds[1],
            },
        ]
    }

    /// Absolute cells covered when anchored at (x, y)
    pub fn cells_at(&self, x: i32, y: i32) -> [(i32, i32, TileKind); 2] {
        self.placements()
            .map(|p| (x + i32::from(p.dx), y + i32::from(p.dy), p.kind))
    }
}

/// Check whether `pair` fits with its anchor at (x, y).
///
/// False if any covered cell is off the grid or already occupied.
pub fn can_place(grid: &Grid, x: i32, y: i32, pair: &Pair) -> bool {
    pair.cells_at(x, y)
        .iter()
        .all(|&(cx, cy, _)| grid.is_empty_at(cx, cy))
}

/// True if some anchor on the grid accepts `pair`
pub fn any_anchor_fits(grid: &Grid, pair: &Pair) -> bool {
    (0..GRID_HEIGHT as i32)
        .any(|y| (0..GRID_WIDTH as i32).any(|x| can_place(grid, x, y, pair)))
}
