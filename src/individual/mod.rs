//! # Individual Trait
//!
//! The `Individual` trait is the surface a genetic algorithm engine sees of one
//! member of its population: it can be encoded to a chromosome, decoded to a
//! solution, repaired, and cloned.
//!
//! ## Example
//!
//! ```rust
//! use bitgene::individual::{BinaryIndividual, Individual, IndividualOptions};
//! use bitgene::rng::RandomNumberGenerator;
//!
//! fn repaired<I: Individual>(mut individual: I) -> I {
//!     let mut rng = RandomNumberGenerator::new();
//!     individual.bound_check(&mut rng).unwrap();
//!     individual
//! }
//!
//! let options = IndividualOptions::builder().range(1, 7).build().unwrap();
//! let mut individual = BinaryIndividual::new(options).unwrap();
//! individual.init_chromosome(vec![0, 0, 0]).unwrap();
//!
//! let individual = repaired(individual);
//! assert!([1.0, 2.0, 4.0].contains(&individual.solution()[0]));
//! ```

pub mod binary;
pub mod options;
pub mod repair;

use std::fmt::Debug;

use crate::{error::Result, rng::RandomSource};

/// Trait for the encoded members of a population.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`, and `Sync`
/// so an engine can copy and distribute them.
pub trait Individual: Clone + Debug + Send + Sync {
    /// Encodes the current solution into a chromosome.
    fn encode(&self) -> Result<Vec<u8>>;

    /// Decodes the current chromosome into a solution.
    fn decode(&self) -> Vec<f64>;

    /// Repairs variables that violate the problem's bounds and returns the individual.
    fn bound_check<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<&mut Self>;

    /// The current chromosome.
    fn chromosome(&self) -> &[u8];

    /// The current solution.
    fn solution(&self) -> &[f64];

    /// Returns an independent copy with equal chromosome, solution and configuration.
    ///
    /// The default implementation relies on `Clone`, which for owned storage
    /// shares nothing with `self`.
    fn clone_equivalent(&self) -> Self {
        self.clone()
    }
}

pub use binary::{BinaryIndividual, Initializer};
pub use options::{IndividualOptions, IndividualOptionsBuilder, Precision};
pub use repair::{plan_repairs, repair_candidates, SegmentRepair};
