pub mod encoding;
pub mod error;
pub mod individual;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{GeneticError, Result};
pub use individual::{BinaryIndividual, Individual, IndividualOptions, Initializer, Precision};
