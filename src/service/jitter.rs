//! Bounded random source for fallback scoring
//!
//! Fallback scores carry a small perturbation so degraded-mode feedback does
//! not read as a wall of identical numbers. The source is a trait so tests
//! can pin the sequence and assert exact scores.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of bounded non-negative random offsets
pub trait JitterSource {
    /// Uniform sample in `[0, bound)`; `bound` of 0 yields 0.
    fn sample(&mut self, bound: u32) -> i32;
}

/// Default source backed by a small PRNG
pub struct RandomJitter {
    rng: SmallRng,
}

impl RandomJitter {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded constructor for reproducible runs
    #[cfg(test)]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for RandomJitter {
    fn sample(&mut self, bound: u32) -> i32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound) as i32
    }
}

#[cfg(test)]
pub mod testing {
    use super::JitterSource;

    /// Replays a fixed sequence, repeating the last value when exhausted
    pub struct FixedJitter {
        values: Vec<i32>,
        next: usize,
    }

    impl FixedJitter {
        pub fn new(values: Vec<i32>) -> Self {
            Self { values, next: 0 }
        }

        /// Source that always returns 0 (no perturbation)
        pub fn zero() -> Self {
            Self::new(vec![0])
        }
    }

    impl JitterSource for FixedJitter {
        fn sample(&mut self, bound: u32) -> i32 {
            let value = self
                .values
                .get(self.next)
                .or(self.values.last())
                .copied()
                .unwrap_or(0);
            if self.next < self.values.len() {
                self.next += 1;
            }
            value.clamp(0, bound.saturating_sub(1) as i32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stays_in_bound() {
        let mut jitter = RandomJitter::from_seed(7);
        for _ in 0..200 {
            let v = jitter.sample(20);
            assert!((0..20).contains(&v));
        }
    }

    #[test]
    fn test_zero_bound_yields_zero() {
        let mut jitter = RandomJitter::from_seed(7);
        assert_eq!(jitter.sample(0), 0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a: Vec<i32> = {
            let mut j = RandomJitter::from_seed(42);
            (0..10).map(|_| j.sample(100)).collect()
        };
        let b: Vec<i32> = {
            let mut j = RandomJitter::from_seed(42);
            (0..10).map(|_| j.sample(100)).collect()
        };
        assert_eq!(a, b);
    }
}
