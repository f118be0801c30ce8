//! # BinaryIndividual
//!
//! A `BinaryIndividual` keeps a solution vector and its binary chromosome in
//! sync. Each variable owns a fixed-width segment of the chromosome whose width
//! is derived once, at construction, from the variable's range and precision.
//!
//! ## Example
//!
//! ```rust
//! use bitgene::individual::{BinaryIndividual, IndividualOptions};
//!
//! let options = IndividualOptions::builder()
//!     .ranges(vec![(1i64, 31i64), (1, 31)])
//!     .precision(1.0)
//!     .build()
//!     .unwrap();
//! let mut individual = BinaryIndividual::new(options).unwrap();
//!
//! individual.init_solution(vec![8.0, 1.0]).unwrap();
//! assert_eq!(individual.chromosome(), &[0, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
//! assert_eq!(individual.decode(), vec![8.0, 1.0]);
//! ```

use crate::{
    encoding::{binarize, decimalize, gene_segments, total_length, GeneSegment, VariableRange},
    error::{GeneticError, Result},
    rng::{RandomSource, ThreadLocalRng},
};

use super::{options::IndividualOptions, repair::plan_repairs, Individual};

/// Where a (re)initialization takes its values from.
#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    /// Draw every variable uniformly from its integer range.
    Random,
    /// Use the given solution and encode it.
    Solution(Vec<f64>),
    /// Use the given chromosome and decode it.
    Chromosome(Vec<u8>),
}

/// An individual whose solution is encoded as a concatenation of fixed-width bit segments.
///
/// With the `serde` feature, only ranges, precisions, chromosome and solution
/// are serialized. Deserialization re-derives the segment layout and rejects
/// input that does not validate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "BinaryIndividualRepr", try_from = "BinaryIndividualRepr")
)]
pub struct BinaryIndividual {
    ranges: Vec<VariableRange>,
    precisions: Vec<f64>,
    lengths: Vec<usize>,
    gene_segments: Vec<GeneSegment>,
    chromosome: Vec<u8>,
    solution: Vec<f64>,
}

impl BinaryIndividual {
    /// Creates a randomly initialized individual using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options do not validate.
    pub fn new(options: IndividualOptions) -> Result<Self> {
        Self::with_rng(options, &mut ThreadLocalRng)
    }

    /// Creates a randomly initialized individual drawing from `rng`.
    pub fn with_rng<R: RandomSource + ?Sized>(
        options: IndividualOptions,
        rng: &mut R,
    ) -> Result<Self> {
        let mut individual = Self::uninitialized(&options)?;
        individual.init(Initializer::Random, rng)?;

        Ok(individual)
    }

    /// Derives the segment layout, leaving chromosome and solution empty.
    fn uninitialized(options: &IndividualOptions) -> Result<Self> {
        options.validate()?;

        let precisions = options.precisions()?;
        let lengths = options.lengths()?;
        let gene_segments = gene_segments(&lengths);

        tracing::debug!(
            variables = lengths.len(),
            chromosome_len = total_length(&lengths),
            ?lengths,
            "constructed binary individual"
        );

        Ok(Self {
            ranges: options.ranges().to_vec(),
            precisions,
            lengths,
            gene_segments,
            chromosome: Vec::new(),
            solution: Vec::new(),
        })
    }

    /// Replaces chromosome and solution from the given initializer.
    ///
    /// On error the individual is left unchanged.
    ///
    /// # Errors
    ///
    /// - `GeneticError::DimensionMismatch` if a solution or chromosome has the wrong length.
    /// - `GeneticError::InvalidBit` if a chromosome entry is neither 0 nor 1.
    /// - `GeneticError::Overflow` or `GeneticError::InvalidValue` if a solution value
    ///   cannot be encoded in its segment.
    pub fn init<R: RandomSource + ?Sized>(
        &mut self,
        initializer: Initializer,
        rng: &mut R,
    ) -> Result<&mut Self> {
        match initializer {
            Initializer::Random => {
                let solution = self.random_solution(rng);
                tracing::trace!(?solution, "initializing from random solution");
                self.chromosome = self.encode_solution(&solution)?;
                self.solution = solution;
            }
            Initializer::Solution(solution) => {
                tracing::trace!(?solution, "initializing from solution");
                self.chromosome = self.encode_solution(&solution)?;
                self.solution = solution;
            }
            Initializer::Chromosome(chromosome) => {
                tracing::trace!(len = chromosome.len(), "initializing from chromosome");
                self.check_chromosome(&chromosome)?;
                self.solution = self.decode_chromosome(&chromosome);
                self.chromosome = chromosome;
            }
        }

        Ok(self)
    }

    /// Sets the solution and rebuilds the chromosome from it.
    pub fn init_solution(&mut self, solution: Vec<f64>) -> Result<&mut Self> {
        self.init(Initializer::Solution(solution), &mut ThreadLocalRng)
    }

    /// Sets the chromosome and rebuilds the solution from it.
    pub fn init_chromosome(&mut self, chromosome: Vec<u8>) -> Result<&mut Self> {
        self.init(Initializer::Chromosome(chromosome), &mut ThreadLocalRng)
    }

    /// Draws a fresh random solution and rebuilds the chromosome from it.
    pub fn init_random<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<&mut Self> {
        self.init(Initializer::Random, rng)
    }

    /// Encodes the current solution, one segment per variable in order.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.encode_solution(&self.solution)
    }

    /// Decodes the current chromosome, one value per variable in order.
    pub fn decode(&self) -> Vec<f64> {
        self.decode_chromosome(&self.chromosome)
    }

    /// Re-encodes every variable whose segment decodes to zero from a random power of two.
    ///
    /// The check runs on the decoded chromosome, so a stored value that
    /// quantized to an all-zero segment (e.g. 0.2 with precision 0.3) is
    /// repaired too. Repaired solution entries hold the value their new
    /// segment decodes to. Returns the individual unchanged when no segment
    /// decodes to zero.
    pub fn bound_check<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<&mut Self> {
        let decoded = self.decode();
        let repairs = plan_repairs(&decoded, &self.precisions, &self.lengths, rng)?;

        for repair in &repairs {
            repair.apply(
                &mut self.chromosome,
                &mut self.solution,
                &self.gene_segments[repair.index],
            );
        }

        Ok(self)
    }

    /// Returns an independent, value-equal copy of this individual.
    pub fn clone_equivalent(&self) -> Self {
        self.clone()
    }

    pub fn ranges(&self) -> &[VariableRange] {
        &self.ranges
    }

    pub fn precisions(&self) -> &[f64] {
        &self.precisions
    }

    /// Segment width of each variable.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn gene_segments(&self) -> &[GeneSegment] {
        &self.gene_segments
    }

    pub fn chromosome(&self) -> &[u8] {
        &self.chromosome
    }

    pub fn solution(&self) -> &[f64] {
        &self.solution
    }

    pub fn num_variables(&self) -> usize {
        self.ranges.len()
    }

    /// Total number of bits in the chromosome.
    pub fn chromosome_len(&self) -> usize {
        total_length(&self.lengths)
    }

    fn random_solution<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.ranges
            .iter()
            .map(|range| rng.gen_range_inclusive(range.lower, range.upper) as f64)
            .collect()
    }

    fn encode_solution(&self, solution: &[f64]) -> Result<Vec<u8>> {
        if solution.len() != self.num_variables() {
            return Err(GeneticError::DimensionMismatch {
                expected: self.num_variables(),
                actual: solution.len(),
            });
        }

        let mut chromosome = Vec::with_capacity(self.chromosome_len());
        for ((&value, &eps), &length) in solution
            .iter()
            .zip(self.precisions.iter())
            .zip(self.lengths.iter())
        {
            chromosome.extend(binarize(value, eps, length)?);
        }

        Ok(chromosome)
    }

    fn decode_chromosome(&self, chromosome: &[u8]) -> Vec<f64> {
        self.gene_segments
            .iter()
            .zip(self.ranges.iter())
            .zip(self.precisions.iter())
            .map(|((segment, range), &eps)| {
                decimalize(&chromosome[segment.range()], eps, range.lower as f64)
            })
            .collect()
    }

    fn check_chromosome(&self, chromosome: &[u8]) -> Result<()> {
        if chromosome.len() != self.chromosome_len() {
            return Err(GeneticError::DimensionMismatch {
                expected: self.chromosome_len(),
                actual: chromosome.len(),
            });
        }

        match chromosome.iter().position(|&bit| bit > 1) {
            Some(index) => Err(GeneticError::InvalidBit {
                index,
                bit: chromosome[index],
            }),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct BinaryIndividualRepr {
    ranges: Vec<VariableRange>,
    precisions: Vec<f64>,
    chromosome: Vec<u8>,
    solution: Vec<f64>,
}

#[cfg(feature = "serde")]
impl From<BinaryIndividual> for BinaryIndividualRepr {
    fn from(individual: BinaryIndividual) -> Self {
        Self {
            ranges: individual.ranges,
            precisions: individual.precisions,
            chromosome: individual.chromosome,
            solution: individual.solution,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BinaryIndividualRepr> for BinaryIndividual {
    type Error = GeneticError;

    fn try_from(repr: BinaryIndividualRepr) -> Result<Self> {
        let precision = super::options::Precision::PerVariable(repr.precisions);
        let options = IndividualOptions::new(repr.ranges, precision)?;
        let mut individual = Self::uninitialized(&options)?;

        individual.check_chromosome(&repr.chromosome)?;
        if repr.solution.len() != individual.num_variables() {
            return Err(GeneticError::DimensionMismatch {
                expected: individual.num_variables(),
                actual: repr.solution.len(),
            });
        }

        individual.chromosome = repr.chromosome;
        individual.solution = repr.solution;
        Ok(individual)
    }
}

impl Individual for BinaryIndividual {
    fn encode(&self) -> Result<Vec<u8>> {
        BinaryIndividual::encode(self)
    }

    fn decode(&self) -> Vec<f64> {
        BinaryIndividual::decode(self)
    }

    fn bound_check<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<&mut Self> {
        BinaryIndividual::bound_check(self, rng)
    }

    fn chromosome(&self) -> &[u8] {
        &self.chromosome
    }

    fn solution(&self) -> &[f64] {
        &self.solution
    }

    fn clone_equivalent(&self) -> Self {
        BinaryIndividual::clone_equivalent(self)
    }
}
