//! Segment widths and gene offsets.
//!
//! Every variable of a solution owns one contiguous run of bits in the
//! chromosome. Its width follows from the variable's range and precision, and
//! the runs are laid out back to back in variable order.

use std::ops::Range;

/// An inclusive integer range `(lower, upper)` for one solution variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableRange {
    pub lower: i64,
    pub upper: i64,
}

impl VariableRange {
    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// `upper - lower`, computed in floating point so extreme bounds cannot overflow.
    pub fn span(&self) -> f64 {
        self.upper as f64 - self.lower as f64
    }

    /// Number of integers in the range.
    pub fn cardinality(&self) -> f64 {
        self.span() + 1.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower as f64 && value <= self.upper as f64
    }
}

impl From<(i64, i64)> for VariableRange {
    fn from((lower, upper): (i64, i64)) -> Self {
        Self::new(lower, upper)
    }
}

/// The `[start, end)` bit offsets of one variable inside the chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneSegment {
    pub start: usize,
    pub end: usize,
}

impl GeneSegment {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Width of the segment in bits.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The segment as a slice index.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Returns the number of bits needed for a variable with the given range and precision.
///
/// The width is `ceil(log2((upper - lower + 1) / eps))`. When `eps` does not
/// evenly divide the span the resulting precision is only approximate; that is
/// accepted rather than reported.
///
/// # Examples
///
/// ```rust
/// use bitgene::encoding::{segment_length, VariableRange};
///
/// assert_eq!(segment_length(&VariableRange::new(1, 31), 1.0), 5);
/// assert_eq!(segment_length(&VariableRange::new(1, 7), 1.0), 3);
/// assert_eq!(segment_length(&VariableRange::new(0, 10), 0.1), 7);
/// ```
pub fn segment_length(range: &VariableRange, eps: f64) -> usize {
    (range.cardinality() / eps).log2().ceil() as usize
}

/// Lays out segments of the given widths back to back, starting at offset zero.
///
/// The returned segments are contiguous and together cover `[0, sum(lengths))`.
///
/// ```rust
/// use bitgene::encoding::{gene_segments, GeneSegment};
///
/// let segments = gene_segments(&[5, 3, 2]);
/// assert_eq!(
///     segments,
///     vec![GeneSegment::new(0, 5), GeneSegment::new(5, 8), GeneSegment::new(8, 10)]
/// );
/// ```
pub fn gene_segments(lengths: &[usize]) -> Vec<GeneSegment> {
    lengths
        .iter()
        .scan(0usize, |offset, &length| {
            let start = *offset;
            *offset += length;
            Some(GeneSegment::new(start, *offset))
        })
        .collect()
}

/// Total chromosome width for the given segment widths.
pub fn total_length(lengths: &[usize]) -> usize {
    lengths.iter().sum()
}
