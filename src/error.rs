//! # Error Types
//!
//! This module defines the error type shared by the codec, the configuration
//! layer and the individual facade.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitgene::error::{GeneticError, Result};
//! use bitgene::encoding::binarize;
//!
//! fn encode_three() -> Result<Vec<u8>> {
//!     binarize(3.0, 1.0, 5)
//! }
//!
//! assert_eq!(encode_three().unwrap(), vec![0, 0, 0, 1, 1]);
//!
//! match binarize(32.0, 1.0, 5) {
//!     Err(GeneticError::Overflow { length, .. }) => assert_eq!(length, 5),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while building, encoding or decoding an individual.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a value needs more bits than its gene segment holds.
    #[error("Overflow error: value {value} with precision {eps} does not fit in {length} bits")]
    Overflow { value: f64, eps: f64, length: usize },

    /// Error that occurs when a negative, NaN or infinite value is handed to the codec.
    #[error("Invalid numeric value: {0}")]
    InvalidValue(String),

    /// Error that occurs when a solution or chromosome has the wrong number of entries.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Error that occurs when a chromosome holds something other than 0 or 1.
    #[error("Invalid bit {bit} at position {index}")]
    InvalidBit { index: usize, bit: u8 },

    /// Error that occurs when no power of two encodes to a nonzero segment
    /// for a zero-valued variable.
    #[error("Variable {index} cannot be repaired: no nonzero candidate fits its segment")]
    Unrepairable { index: usize },
}

/// A specialized Result type for codec and individual operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;
