//! RNG module - pair generation
//!
//! Every pair gets two independent, uniformly chosen tile kinds and one of the
//! two orientations with equal probability. A small LCG keeps games reproducible
//! from a seed (handy for tests and for replaying a bug report).

use crate::pair::Pair;
use crate::types::{Orientation, TileKind, TILE_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods
    /// (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Produces the falling pairs
#[derive(Debug, Clone)]
pub struct PairGenerator {
    rng: SimpleRng,
}

impl PairGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next pair, advancing the RNG
    pub fn generate(&mut self) -> Pair {
        let first = self.next_kind();
        let second = self.next_kind();
        let orientation = if self.rng.next_range(2) == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Pair::new(orientation, [first, second])
    }

    fn next_kind(&mut self) -> TileKind {
        TileKind::wrapping(self.rng.next_range(u32::from(TILE_KINDS)) as u8)
    }

    /// Current RNG state (restarting from it replays the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PairGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_generator_same_seed_same_pairs() {
        let mut a = PairGenerator::new(99);
        let mut b = PairGenerator::new(99);
        for _ in 0..50 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_generator_covers_kinds_and_orientations() {
        let mut generator = PairGenerator::new(2024);
        let mut seen_kinds = [false; TILE_KINDS as usize];
        let mut horizontal = 0;
        let mut vertical = 0;

        for _ in 0..400 {
            let pair = generator.generate();
            for kind in pair.kinds() {
                seen_kinds[kind.id() as usize] = true;
            }
            match pair.orientation() {
                Orientation::Horizontal => horizontal += 1,
                Orientation::Vertical => vertical += 1,
            }
        }

        assert!(seen_kinds.iter().all(|&s| s), "kinds seen: {:?}", seen_kinds);
        // Loose balance check: both orientations are common.
        assert!(horizontal > 120, "horizontal = {horizontal}");
        assert!(vertical > 120, "vertical = {vertical}");
    }
}
