//! Randomness seam for the turn controller.
//!
//! All random draws the game makes (the player's mark, the starting
//! turn, the computer's cell choice) go through [`RandomSource`] so
//! tests can script deterministic sequences.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the uniform random draws the game needs.
pub trait RandomSource {
    /// A fair coin flip.
    fn coin(&mut self) -> bool;

    /// A uniform index in `0..len`. Callers guarantee `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local RNG-backed source, used outside of tests.
#[derive(Debug, Default)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    /// Creates a source backed by the thread-local generator.
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl RandomSource for ThreadRandom {
    fn coin(&mut self) -> bool {
        self.0.random_bool(0.5)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Seeded source for reproducible sessions (`--seed`).
#[derive(Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Creates a source seeded from the given value.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn coin(&mut self) -> bool {
        self.0.random_bool(0.5)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_range() {
        let mut source = ThreadRandom::new();
        for len in 1..10 {
            assert!(source.pick(len) < len);
        }
    }

    #[test]
    fn test_seeded_sequences_repeat() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..32 {
            assert_eq!(a.coin(), b.coin());
            assert_eq!(a.pick(9), b.pick(9));
        }
    }
}
