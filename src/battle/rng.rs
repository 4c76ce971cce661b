use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the randomness the battle needs: damage rolls and replacement
/// picks. Abstract so tests can feed deterministic values.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn roll_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index into a pool of `len` entries, or None for an empty pool.
    fn pick_index(&mut self, len: usize) -> Option<usize>;
}

/// StdRng-backed production source.
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed, for reproducing a run.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}
