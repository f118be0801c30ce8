//! # Binary Encoding
//!
//! The building blocks shared by every binary individual:
//!
//! - `segment_length` derives the bit width of one variable from its range and precision.
//! - `gene_segments` lays those widths out as contiguous `[start, end)` offsets.
//! - `binarize` and `decimalize` convert a single value to and from its segment.
//!
//! ## Example
//!
//! ```rust
//! use bitgene::encoding::{binarize, decimalize, gene_segments, segment_length, VariableRange};
//!
//! let ranges = [VariableRange::new(1, 31), VariableRange::new(1, 31)];
//! let lengths: Vec<usize> = ranges.iter().map(|r| segment_length(r, 1.0)).collect();
//! assert_eq!(lengths, vec![5, 5]);
//!
//! let mut chromosome = binarize(8.0, 1.0, lengths[0]).unwrap();
//! chromosome.extend(binarize(1.0, 1.0, lengths[1]).unwrap());
//! assert_eq!(chromosome, vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
//!
//! let solution: Vec<f64> = gene_segments(&lengths)
//!     .iter()
//!     .zip(ranges.iter())
//!     .map(|(segment, range)| decimalize(&chromosome[segment.range()], 1.0, range.lower as f64))
//!     .collect();
//! assert_eq!(solution, vec![8.0, 1.0]);
//! ```

pub mod codec;
pub mod segment;

pub use codec::{binarize, decimalize, fits, quantize};
pub use segment::{gene_segments, segment_length, total_length, GeneSegment, VariableRange};
