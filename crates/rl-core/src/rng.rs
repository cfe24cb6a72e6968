//! Random number generation.
//!
//! Uses a seeded ChaCha RNG so whole games replay deterministically from a
//! single seed. The handle is owned by [`crate::GameState`] and threaded
//! explicitly into map generation and combat.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Game random number generator
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns 1..=n, or 0 if n is 0.
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// Uniform draw from the inclusive range lo..=hi.
    ///
    /// Returns lo when the range is empty or inverted.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: u32) -> bool {
        self.rn2(n) == 0
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            assert!(rng.rn2(10) < 10);
        }
    }

    #[test]
    fn test_rnd_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rnd(6);
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.range(4, 10);
            assert!((4..=10).contains(&n));
        }
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(7, 3), 7);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
        }
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.rnd(0), 0);
    }
}
