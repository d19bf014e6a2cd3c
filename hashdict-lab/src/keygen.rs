//! Test-data generation
//!
//! Uses a seeded ChaCha stream so a survey can be repeated exactly

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Characters per generated value
pub const VALUE_LEN: usize = 5;

/// Generator of distinct string keys and short random values
pub struct KeyGenerator {
    rng: ChaCha8Rng,

    /// Seed used for generation
    seed: u64,
}

impl KeyGenerator {
    /// Create new generator with fixed seed
    pub fn new(seed: u64) -> Self {
        KeyGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Key number `index`: the index twice followed by a random number
    ///
    /// Collisions between indices are possible but rare; surveys count them as
    /// rejected adds.
    pub fn key(&mut self, index: usize) -> String {
        format!("{}{}{}", index, index, self.rng.gen::<u32>())
    }

    /// Five characters drawn from code points below 255
    pub fn value(&mut self) -> String {
        (0..VALUE_LEN)
            .map(|_| char::from(self.rng.gen_range(0u8..255)))
            .collect()
    }

    /// Generate `n` keys and `n` values
    pub fn generate(&mut self, n: usize) -> (Vec<String>, Vec<String>) {
        let keys = (0..n).map(|i| self.key(i)).collect();
        let values = (0..n).map(|_| self.value()).collect();
        (keys, values)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
