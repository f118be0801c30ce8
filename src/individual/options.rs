//! # IndividualOptions
//!
//! The `IndividualOptions` struct holds everything a binary individual is built
//! from: one inclusive integer range per variable and the precision used to
//! quantize them.
//!
//! ## Example
//!
//! ```rust
//! use bitgene::individual::options::{IndividualOptions, Precision};
//! use bitgene::encoding::VariableRange;
//!
//! // Scalar precision shared by every variable
//! let ranges = vec![VariableRange::new(1, 31), VariableRange::new(1, 31)];
//! let options = IndividualOptions::new(ranges, 1.0).unwrap();
//! assert_eq!(options.precisions().unwrap(), vec![1.0, 1.0]);
//!
//! // Per-variable precision through the builder
//! let options = IndividualOptions::builder()
//!     .range(0, 10)
//!     .range(1, 7)
//!     .precisions(vec![0.5, 1.0])
//!     .build()
//!     .unwrap();
//! assert_eq!(options.ranges()[1], VariableRange::new(1, 7));
//! assert_eq!(options.precision(), &Precision::PerVariable(vec![0.5, 1.0]));
//! ```
//!
//! ## Validation
//!
//! Construction fails with `GeneticError::Configuration` when:
//!
//! - no range is given,
//! - a range has a negative lower bound or `lower > upper`,
//! - a precision is not a positive finite number or exceeds `upper - lower`,
//! - a per-variable precision list does not match the number of ranges,
//! - a variable needs more than 64 bits, or its upper bound does not fit the
//!   width derived for it (e.g. `(1, 8)` with precision 1 gets 3 bits).

use crate::{
    encoding::{fits, quantize, segment_length, VariableRange},
    error::{GeneticError, Result},
};

/// Widest segment a single variable may occupy.
pub const MAX_SEGMENT_LENGTH: usize = 64;

/// Precision used when none is configured.
pub const DEFAULT_PRECISION: f64 = 1.0;

/// The quantization step of each variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// One step shared by every variable.
    Scalar(f64),
    /// One step per variable, in range order.
    PerVariable(Vec<f64>),
}

impl Precision {
    /// Expands the precision to one step per variable.
    pub fn expand(&self, num_variables: usize) -> Result<Vec<f64>> {
        match self {
            Precision::Scalar(eps) => Ok(vec![*eps; num_variables]),
            Precision::PerVariable(eps) if eps.len() == num_variables => Ok(eps.clone()),
            Precision::PerVariable(eps) => Err(GeneticError::Configuration(format!(
                "Expected {} precisions, one per range, got {}",
                num_variables,
                eps.len()
            ))),
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Scalar(DEFAULT_PRECISION)
    }
}

impl From<f64> for Precision {
    fn from(eps: f64) -> Self {
        Precision::Scalar(eps)
    }
}

impl From<Vec<f64>> for Precision {
    fn from(eps: Vec<f64>) -> Self {
        Precision::PerVariable(eps)
    }
}

/// Validated construction input of a binary individual.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualOptions {
    ranges: Vec<VariableRange>,
    precision: Precision,
}

impl IndividualOptions {
    /// Creates and validates a new `IndividualOptions` instance.
    ///
    /// # Arguments
    ///
    /// * `ranges` - One inclusive range per variable, in solution order.
    /// * `precision` - A scalar step or a `Vec` with one step per range.
    pub fn new(ranges: Vec<VariableRange>, precision: impl Into<Precision>) -> Result<Self> {
        let options = Self {
            ranges,
            precision: precision.into(),
        };
        options.validate()?;
        Ok(options)
    }

    /// Returns a builder for creating an `IndividualOptions` instance.
    pub fn builder() -> IndividualOptionsBuilder {
        IndividualOptionsBuilder::default()
    }

    pub fn ranges(&self) -> &[VariableRange] {
        &self.ranges
    }

    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    pub fn num_variables(&self) -> usize {
        self.ranges.len()
    }

    /// Returns one precision per variable.
    pub fn precisions(&self) -> Result<Vec<f64>> {
        self.precision.expand(self.ranges.len())
    }

    /// Returns the segment width of every variable.
    pub fn lengths(&self) -> Result<Vec<usize>> {
        Ok(self
            .ranges
            .iter()
            .zip(self.precisions()?)
            .map(|(range, eps)| segment_length(range, eps))
            .collect())
    }

    /// Checks that every range/precision pair yields a usable segment.
    pub fn validate(&self) -> Result<()> {
        if self.ranges.is_empty() {
            return Err(GeneticError::Configuration(
                "At least one variable range is required".to_string(),
            ));
        }

        let precisions = self.precisions()?;

        for (index, (range, &eps)) in self.ranges.iter().zip(precisions.iter()).enumerate() {
            validate_variable(index, range, eps)?;
        }

        Ok(())
    }
}

fn validate_variable(index: usize, range: &VariableRange, eps: f64) -> Result<()> {
    if range.lower < 0 {
        return Err(GeneticError::Configuration(format!(
            "Range {} has negative lower bound {}, only non-negative values can be encoded",
            index, range.lower
        )));
    }

    if range.lower > range.upper {
        return Err(GeneticError::Configuration(format!(
            "Range {} is empty: lower bound {} exceeds upper bound {}",
            index, range.lower, range.upper
        )));
    }

    if !eps.is_finite() || eps <= 0.0 {
        return Err(GeneticError::Configuration(format!(
            "Precision {} of variable {} must be a positive finite number",
            eps, index
        )));
    }

    if eps > range.span() {
        return Err(GeneticError::Configuration(format!(
            "Precision {} of variable {} exceeds the span {} of its range",
            eps,
            index,
            range.span()
        )));
    }

    let length = segment_length(range, eps);
    if length > MAX_SEGMENT_LENGTH {
        return Err(GeneticError::Configuration(format!(
            "Variable {} needs {} bits, at most {} are supported",
            index, length, MAX_SEGMENT_LENGTH
        )));
    }

    let upper_steps = quantize(range.upper as f64, eps)?;
    if !fits(upper_steps, length) {
        return Err(GeneticError::Configuration(format!(
            "Upper bound {} of variable {} does not fit in its {} bit segment",
            range.upper, index, length
        )));
    }

    Ok(())
}

/// Builder for `IndividualOptions`.
///
/// Provides a fluent interface for constructing `IndividualOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct IndividualOptionsBuilder {
    ranges: Vec<VariableRange>,
    precision: Option<Precision>,
}

impl IndividualOptionsBuilder {
    /// Appends one variable range.
    pub fn range(mut self, lower: i64, upper: i64) -> Self {
        self.ranges.push(VariableRange::new(lower, upper));
        self
    }

    /// Appends several variable ranges.
    pub fn ranges<I, R>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<VariableRange>,
    {
        self.ranges.extend(ranges.into_iter().map(Into::into));
        self
    }

    /// Sets one precision for every variable.
    pub fn precision(mut self, eps: f64) -> Self {
        self.precision = Some(Precision::Scalar(eps));
        self
    }

    /// Sets one precision per variable.
    pub fn precisions(mut self, eps: Vec<f64>) -> Self {
        self.precision = Some(Precision::PerVariable(eps));
        self
    }

    /// Builds and validates the `IndividualOptions` instance.
    pub fn build(self) -> Result<IndividualOptions> {
        IndividualOptions::new(self.ranges, self.precision.unwrap_or_default())
    }
}
