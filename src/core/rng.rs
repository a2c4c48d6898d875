//! RNG module - the piece pouch
//!
//! Implements a draw-without-replacement bag: the pouch holds the piece
//! kinds not yet dealt in the current cycle, refills with all 7 kinds
//! exactly when drained, and each draw picks uniformly among the remaining
//! kinds. A kind can therefore repeat at most twice in a row, straddling a
//! refill boundary.
//!
//! Randomness comes from a simple seedable LCG so games are reproducible.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick a rotation uniformly among the four quadrants
    pub fn random_rotation(&mut self) -> Rotation {
        Rotation::ALL[self.next_range(Rotation::ALL.len() as u32) as usize]
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

/// Draw-without-replacement bag of the piece kinds still to be dealt
#[derive(Debug, Clone)]
pub struct Pouch {
    remaining: ArrayVec<PieceKind, 7>,
}

impl Pouch {
    /// Create a full pouch
    pub fn new() -> Self {
        let mut pouch = Self {
            remaining: ArrayVec::new(),
        };
        pouch.refill();
        pouch
    }

    /// Reset to the full 7-kind set
    pub fn refill(&mut self) {
        self.remaining.clear();
        self.remaining.extend(PieceKind::ALL);
    }

    /// Draw one kind, refilling first if the pouch is empty.
    ///
    /// Selection is a uniform pick among the remaining kinds; order within
    /// the pouch is irrelevant, so `swap_remove` is fine.
    pub fn draw(&mut self, rng: &mut SimpleRng) -> PieceKind {
        if self.remaining.is_empty() {
            self.refill();
        }
        let index = rng.next_range(self.remaining.len() as u32) as usize;
        self.remaining.swap_remove(index)
    }

    /// Kinds not yet dealt in the current cycle
    pub fn remaining(&self) -> &[PieceKind] {
        &self.remaining
    }
}

impl Default for Pouch {
    fn default() -> Self {
        Self::new()
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
    fn test_rng_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_random_rotation_covers_all_quadrants() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let r = rng.random_rotation();
            seen[Rotation::ALL.iter().position(|&x| x == r).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_pouch_deals_each_kind_once_per_cycle() {
        let mut rng = SimpleRng::new(1);
        let mut pouch = Pouch::new();

        let mut drawn = Vec::new();
        for _ in 0..7 {
            drawn.push(pouch.draw(&mut rng));
        }

        assert_eq!(drawn.len(), 7);
        for kind in PieceKind::ALL {
            assert_eq!(
                drawn.iter().filter(|&&k| k == kind).count(),
                1,
                "kind {:?} not dealt exactly once",
                kind
            );
        }
        assert!(pouch.remaining().is_empty());
    }

    #[test]
    fn test_pouch_refills_before_eighth_draw() {
        let mut rng = SimpleRng::new(1);
        let mut pouch = Pouch::new();

        for _ in 0..7 {
            pouch.draw(&mut rng);
        }
        assert!(pouch.remaining().is_empty());

        // Eighth draw refills and deals from a fresh cycle.
        pouch.draw(&mut rng);
        assert_eq!(pouch.remaining().len(), 6);
    }

    #[test]
    fn test_pouch_cycles_stay_complete_over_many_draws() {
        let mut rng = SimpleRng::new(99);
        let mut pouch = Pouch::new();

        for _ in 0..50 {
            let mut cycle = Vec::new();
            for _ in 0..7 {
                cycle.push(pouch.draw(&mut rng));
            }
            cycle.sort_by_key(|k| k.as_str());
            cycle.dedup();
            assert_eq!(cycle.len(), 7);
        }
    }
}
