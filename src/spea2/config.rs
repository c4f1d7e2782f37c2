//! SPEA2 configuration.

use crate::error::Result;
use crate::validate::{check_at_least, check_dimensions, check_rate};

/// Configuration for the SPEA2 engine.
///
/// Offspring are produced by fitness tournament over the archive followed
/// by bit-flip mutation. There is no crossover step.
///
/// # Examples
///
/// ```
/// use u_moea::spea2::Spea2Config;
///
/// let config = Spea2Config::new(40, 2)
///     .with_population_size(60)
///     .with_archive_size(30)
///     .with_mutation_rate(0.02);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spea2Config {
    /// Length of every decision vector.
    pub num_bits: usize,

    /// Number of objectives returned by the oracle.
    pub num_objectives: usize,

    /// Number of offspring produced each generation.
    pub population_size: usize,

    /// Capacity of the external archive.
    pub archive_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Per-bit flip probability.
    pub mutation_rate: f64,

    /// Whether to evaluate batches in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Spea2Config {
    /// Creates a configuration for the given problem dimensions.
    pub fn new(num_bits: usize, num_objectives: usize) -> Self {
        Self {
            num_bits,
            num_objectives,
            population_size: 100,
            archive_size: 100,
            max_generations: 100,
            mutation_rate: 0.01,
            parallel: true,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the archive capacity.
    pub fn with_archive_size(mut self, n: usize) -> Self {
        self.archive_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-bit mutation rate (clamped to [0, 1]).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.num_bits, self.num_objectives)?;
        check_at_least("population_size", self.population_size, 2)?;
        check_at_least("archive_size", self.archive_size, 1)?;
        check_at_least("max_generations", self.max_generations, 1)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}
