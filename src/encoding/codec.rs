//! Conversion between a single value and its fixed-width bit segment.
//!
//! Values are quantized to `floor(value / eps)` and written as an unsigned,
//! most-significant-bit-first integer. The encoding is absolute: the range's
//! lower bound is never subtracted on either side.

use crate::error::{GeneticError, Result};

/// Quantizes `value` to the step count `floor(value / eps)`.
///
/// # Errors
///
/// Returns `GeneticError::InvalidValue` if the quotient is negative, NaN or
/// infinite, and `GeneticError::Overflow` if it does not fit in a `u64`.
pub fn quantize(value: f64, eps: f64) -> Result<u64> {
    let steps = (value / eps).floor();

    if !steps.is_finite() || steps < 0.0 {
        return Err(GeneticError::InvalidValue(format!(
            "{} with precision {} cannot be encoded as an unsigned integer",
            value, eps
        )));
    }

    // 2^64 is exactly representable, every f64 below it converts losslessly.
    if steps >= 18_446_744_073_709_551_616.0 {
        return Err(GeneticError::Overflow {
            value,
            eps,
            length: 64,
        });
    }

    Ok(steps as u64)
}

/// Returns `true` if `n` can be written with `length` bits.
pub fn fits(n: u64, length: usize) -> bool {
    length >= 64 || n >> length == 0
}

/// Converts a value into a big-endian bit sequence of exactly `length` bits.
///
/// # Errors
///
/// A value needing more than `length` bits is rejected with
/// `GeneticError::Overflow` instead of being written wider than its segment.
///
/// # Examples
///
/// ```rust
/// use bitgene::encoding::binarize;
///
/// assert_eq!(binarize(3.0, 1.0, 5).unwrap(), vec![0, 0, 0, 1, 1]);
/// assert_eq!(binarize(2.5, 0.5, 4).unwrap(), vec![0, 1, 0, 1]);
/// assert!(binarize(8.0, 1.0, 3).is_err());
/// ```
pub fn binarize(value: f64, eps: f64, length: usize) -> Result<Vec<u8>> {
    let n = quantize(value, eps)?;

    if !fits(n, length) {
        return Err(GeneticError::Overflow { value, eps, length });
    }

    Ok((0..length)
        .rev()
        .map(|shift| if shift < 64 { ((n >> shift) & 1) as u8 } else { 0 })
        .collect())
}

/// Converts a big-endian bit sequence back into a value, `integer(bits) * eps`.
///
/// `lower_bound` is part of the signature but does not take part in the
/// arithmetic; decoding mirrors `binarize` and yields the absolute value.
/// Any nonzero entry counts as a set bit. Only the last 64 bits are significant.
///
/// ```rust
/// use bitgene::encoding::decimalize;
///
/// assert_eq!(decimalize(&[0, 0, 0, 1, 1], 1.0, 1.0), 3.0);
/// assert_eq!(decimalize(&[1, 0, 1], 0.5, 0.0), 2.5);
/// ```
pub fn decimalize(bits: &[u8], eps: f64, _lower_bound: f64) -> f64 {
    let n = bits
        .iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit != 0));
    n as f64 * eps
}
