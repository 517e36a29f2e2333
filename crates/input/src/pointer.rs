//! Mouse tracking.
//!
//! A placement is triggered by pressing the primary button. Some terminals
//! (and touchpads behind them) lose the press and only report the drag that
//! follows, so the first drag of a gesture whose press was never seen counts
//! as a placement too. Later drags of the same gesture do not.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// What a mouse event means for the game, in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Primary button pressed
    Down { col: u16, row: u16 },
    /// First drag of a held gesture without an observed press
    Drag { col: u16, row: u16 },
    /// Pointer moved (hover preview only)
    Hover { col: u16, row: u16 },
    /// Button released
    Up,
}

/// Tracks whether the primary button is held
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    held: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> bool {
        self.held
    }

    pub fn handle(&mut self, event: MouseEvent) -> Option<PointerAction> {
        let (col, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.held = true;
                Some(PointerAction::Down { col, row })
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.held {
                    Some(PointerAction::Hover { col, row })
                } else {
                    self.held = true;
                    Some(PointerAction::Drag { col, row })
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.held = false;
                Some(PointerAction::Up)
            }
            MouseEventKind::Moved => Some(PointerAction::Hover { col, row }),
            _ => None,
        }
    }
}
