//! # Bound Repair
//!
//! Some problems forbid a variable from decoding to exactly zero. Repair
//! replaces every zero variable with a power of two drawn uniformly from
//! `{2^k : 0 <= k < length}` and rewrites its segment accordingly. Each zero
//! variable draws independently; nonzero variables are never touched.
//!
//! The work is split in two steps so ownership stays obvious:
//!
//! 1. `plan_repairs` inspects a decoded solution and returns one `SegmentRepair` per
//!    zero variable, without mutating anything.
//! 2. `SegmentRepair::apply` writes a planned repair into a chromosome and
//!    solution.
//!
//! ## Example
//!
//! ```rust
//! use bitgene::encoding::GeneSegment;
//! use bitgene::individual::repair::plan_repairs;
//! use bitgene::rng::RandomNumberGenerator;
//!
//! let mut chromosome = vec![0, 0, 0];
//! let mut solution = vec![0.0];
//! let segments = [GeneSegment::new(0, 3)];
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let repairs = plan_repairs(&solution, &[1.0], &[3], &mut rng).unwrap();
//! for repair in &repairs {
//!     repair.apply(&mut chromosome, &mut solution, &segments[repair.index]);
//! }
//!
//! assert!([1.0, 2.0, 4.0].contains(&solution[0]));
//! ```

use crate::{
    encoding::{binarize, decimalize, fits, quantize, GeneSegment},
    error::{GeneticError, Result},
    rng::RandomSource,
};

/// A planned replacement of one variable's value and segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRepair {
    /// Position of the variable in the solution.
    pub index: usize,
    /// The value the new segment decodes to. With a precision of 1 this is the
    /// drawn power of two itself.
    pub value: f64,
    /// The new segment bits, exactly as wide as the variable's segment.
    pub bits: Vec<u8>,
}

impl SegmentRepair {
    /// Writes the repair into `chromosome` and `solution`.
    ///
    /// `segment` must be the gene segment of `self.index`.
    pub fn apply(&self, chromosome: &mut [u8], solution: &mut [f64], segment: &GeneSegment) {
        chromosome[segment.range()].copy_from_slice(&self.bits);
        solution[self.index] = self.value;
    }
}

/// Returns the repair candidates `{2^k : 0 <= k < length}` in increasing order.
pub fn repair_candidates(length: usize) -> Vec<f64> {
    (0..length).map(|k| 2f64.powi(k as i32)).collect()
}

/// Candidates whose encoding fits the segment and is not itself all zeros.
///
/// With a precision of 1 this is the full candidate set. Coarser precisions
/// can quantize small powers of two down to zero, and finer ones can push
/// large powers past the segment width; both are left out.
fn encodable_candidates(eps: f64, length: usize) -> Vec<f64> {
    repair_candidates(length)
        .into_iter()
        .filter(|&candidate| {
            quantize(candidate, eps).is_ok_and(|steps| steps > 0 && fits(steps, length))
        })
        .collect()
}

/// Plans the repair of every variable whose decoded value is zero.
///
/// `decoded` is the solution as read back from the chromosome. Each zero
/// variable draws a power of two, encodes it, and stores the value that
/// encoding decodes to, so the repaired solution always matches its segment.
/// Returns an empty plan when no variable is zero.
///
/// # Errors
///
/// Returns `GeneticError::DimensionMismatch` if `precisions` or `lengths` do not
/// match the solution, and `GeneticError::Unrepairable` if no power of two can
/// be encoded as a nonzero segment for a zero variable.
pub fn plan_repairs<R: RandomSource + ?Sized>(
    decoded: &[f64],
    precisions: &[f64],
    lengths: &[usize],
    rng: &mut R,
) -> Result<Vec<SegmentRepair>> {
    for actual in [precisions.len(), lengths.len()] {
        if actual != decoded.len() {
            return Err(GeneticError::DimensionMismatch {
                expected: decoded.len(),
                actual,
            });
        }
    }

    let mut repairs = Vec::new();

    for (index, &value) in decoded.iter().enumerate() {
        if value != 0.0 {
            continue;
        }

        let (eps, length) = (precisions[index], lengths[index]);
        let candidates = encodable_candidates(eps, length);
        if candidates.is_empty() {
            return Err(GeneticError::Unrepairable { index });
        }

        let candidate = candidates[rng.gen_index(candidates.len())];
        let bits = binarize(candidate, eps, length)?;
        let value = decimalize(&bits, eps, 0.0);

        tracing::debug!(index, candidate, value, "repairing zero-valued variable");

        repairs.push(SegmentRepair { index, value, bits });
    }

    Ok(repairs)
}
