//! # Model Seeds
//!
//! A seed fully determines the random choices of a build. Each species
//! draws from its own derived stream, so adding draws to one species never
//! shifts another.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed for reproducible model builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelSeed(u64);

impl ModelSeed {
    /// Seed used when none is given.
    pub const DEFAULT: Self = Self(0x00C0_FFEE_BEEF_F00D);

    /// Creates a new seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose.
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Random stream for this seed.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl Default for ModelSeed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u64> for ModelSeed {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}
