//! Feedback for cleared cells.
//!
//! Each cleared cell gets a short-lived "pop" that the view draws on top of
//! the (now empty) cell. Effects age with the frame clock and disappear after
//! [`POP_EFFECT_MS`].

use arrayvec::ArrayVec;

use crate::types::{GRID_CELLS, POP_EFFECT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopEffect {
    pub x: u8,
    pub y: u8,
    age_ms: u32,
}

impl PopEffect {
    /// Animation progress in 0..=255 (0 = just cleared)
    pub fn progress(&self) -> u8 {
        ((self.age_ms.min(POP_EFFECT_MS) * 255) / POP_EFFECT_MS) as u8
    }
}

/// Live pop effects, at most one per cell
#[derive(Debug, Clone, Default)]
pub struct PopEffects {
    effects: ArrayVec<PopEffect, GRID_CELLS>,
}

impl PopEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start effects for freshly cleared cells; restarts a cell already popping
    pub fn spawn(&mut self, cells: &[(u8, u8)]) {
        for &(x, y) in cells {
            if let Some(e) = self.effects.iter_mut().find(|e| e.x == x && e.y == y) {
                e.age_ms = 0;
            } else if self.effects.try_push(PopEffect { x, y, age_ms: 0 }).is_err() {
                break;
            }
        }
    }

    /// Advance by `dt_ms` and drop finished effects
    pub fn tick(&mut self, dt_ms: u32) {
        for e in self.effects.iter_mut() {
            e.age_ms = e.age_ms.saturating_add(dt_ms);
        }
        self.effects.retain(|e| e.age_ms < POP_EFFECT_MS);
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PopEffect> {
        self.effects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_expire() {
        let mut fx = PopEffects::new();
        fx.spawn(&[(0, 0), (1, 0)]);
        fx.tick(POP_EFFECT_MS / 2);
        assert_eq!(fx.iter().count(), 2);
        assert!(fx.iter().all(|e| e.progress() > 100 && e.progress() < 160));
        fx.tick(POP_EFFECT_MS);
        assert!(fx.is_empty());
    }

    #[test]
    fn respawn_restarts_existing_effect() {
        let mut fx = PopEffects::new();
        fx.spawn(&[(2, 3)]);
        fx.tick(200);
        fx.spawn(&[(2, 3)]);
        assert_eq!(fx.iter().count(), 1);
        assert_eq!(fx.iter().next().map(|e| e.progress()), Some(0));
    }
}
