//! Uniform randomness provider backed by a seedable `StdRng`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vanguard_core::Vec3;

/// Uniform random scalars and vectors over caller-specified ranges
pub trait RandomSource {
    /// Returns a float in [min, max). An empty or inverted range yields `min`.
    fn range(&mut self, min: f32, max: f32) -> f32;

    /// Component-wise `range` over the box spanned by `min` and `max`
    fn vec_range(&mut self, min: Vec3, max: Vec3) -> Vec3 {
        Vec3::new(
            self.range(min.x, max.x),
            self.range(min.y, max.y),
            self.range(min.z, max.z),
        )
    }
}

/// Deterministic generator: the same seed yields the same spawn sequence
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the operating system, for non-reproducible runs
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if min.is_nan() || max.is_nan() || max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }
}
