//! # Random Sources
//!
//! Random initialization and bound repair never reach for a global generator
//! directly. They take a `RandomSource`, which lets callers pick between a
//! reproducible seeded generator, the thread-local generator, or a scripted
//! source in tests.
//!
//! ## Example
//!
//! ```rust
//! use bitgene::rng::{RandomNumberGenerator, RandomSource};
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let value = rng.gen_range_inclusive(1, 31);
//! assert!((1..=31).contains(&value));
//!
//! let index = rng.gen_index(5);
//! assert!(index < 5);
//! ```
//!
//! ## Thread-local RNG
//!
//! `ThreadLocalRng` is a zero-sized handle to `rand::thread_rng()`, so it can be
//! created wherever a source is needed without synchronization:
//!
//! ```rust
//! use bitgene::rng::{RandomSource, ThreadLocalRng};
//!
//! let value = ThreadLocalRng.gen_range_inclusive(-3, 3);
//! assert!((-3..=3).contains(&value));
//! ```

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

/// The randomness an individual consumes.
///
/// Both methods must return values inside the requested bounds; the caller
/// never passes an empty range.
pub trait RandomSource {
    /// Draws an integer uniformly from `low..=high`.
    fn gen_range_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Draws an index uniformly from `0..len`. `len` is at least 1.
    fn gen_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn gen_range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        (**self).gen_range_inclusive(low, high)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        (**self).gen_index(len)
    }
}

/// A thread-local random number generator that can be used without synchronization.
///
/// It uses the built-in `ThreadRng` from the `rand` crate, which is automatically
/// seeded from the system entropy and is thread-local.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLocalRng;

impl ThreadLocalRng {
    /// Generates a random number in the given range.
    ///
    /// # Arguments
    ///
    /// * `range` - The range to generate a random number in.
    pub fn gen_range<T, R>(range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        thread_rng().gen_range(range)
    }
}

impl RandomSource for ThreadLocalRng {
    fn gen_range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        Self::gen_range(low..=high)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        Self::gen_range(0..len)
    }
}

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for RandomNumberGenerator {
    fn gen_range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
