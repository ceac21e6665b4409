#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;

/// Provides the way to use randomized values in generic way.
///
/// An implementation is a random stream owned by exactly one search worker: it is passed down
/// explicitly to every operation which needs randomness and is never shared between threads.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..=max)
    }

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&mut self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    /// Tests probability value in [0., 1.] range.
    fn is_hit(&mut self, probability: f64) -> bool {
        self.uniform_real(0., 1.) < probability.clamp(0., 1.)
    }

    /// Returns an index uniformly distributed in `[0, len)`.
    fn uniform_index(&mut self, len: usize) -> usize {
        assert!(len > 0);
        self.uniform_int(0, len as i32 - 1) as usize
    }

    /// Returns underlying RNG.
    fn get_rng(&mut self) -> &mut dyn RngCore;
}

/// A default random implementation backed by a small and fast non cryptographic generator.
pub struct DefaultRandom {
    rng: SmallRng,
}

impl DefaultRandom {
    /// Creates a new instance `DefaultRandom` with seed. Two instances created with the same seed
    /// produce the same sequence of values.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: SmallRng::from_entropy() }
    }
}

impl Random for DefaultRandom {
    fn get_rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }
}

/// Returns a seed suitable to be used when no explicit seed is given.
pub fn get_random_seed() -> u64 {
    thread_rng().next_u64()
}
