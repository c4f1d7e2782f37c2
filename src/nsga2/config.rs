//! NSGA-II configuration.

use crate::error::Result;
use crate::validate::{check_at_least, check_dimensions, check_rate};
use crate::variation::CrossoverKind;

/// Configuration for the NSGA-II engine.
///
/// # Examples
///
/// ```
/// use u_moea::nsga2::Nsga2Config;
/// use u_moea::CrossoverKind;
///
/// let config = Nsga2Config::new(24, 3) // 24 bits, 3 objectives
///     .with_population_size(80)
///     .with_max_generations(50)
///     .with_crossover(CrossoverKind::Uniform)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Length of every decision vector.
    pub num_bits: usize,

    /// Number of objectives returned by the oracle.
    pub num_objectives: usize,

    /// Number of individuals kept after environmental selection.
    ///
    /// Must be at least 2 for binary tournaments.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Recombination operator.
    pub crossover: CrossoverKind,

    /// Probability that a crossover event fires for a pair of parents.
    ///
    /// When it does not fire, the child is a copy of the first parent.
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every child.
    pub mutation_rate: f64,

    /// Whether to evaluate batches in parallel using rayon.
    ///
    /// Results are identical either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Nsga2Config {
    /// Creates a configuration for the given problem dimensions.
    pub fn new(num_bits: usize, num_objectives: usize) -> Self {
        Self {
            num_bits,
            num_objectives,
            population_size: 100,
            max_generations: 100,
            crossover: CrossoverKind::Uniform,
            crossover_rate: 0.9,
            mutation_rate: 0.02,
            parallel: true,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, kind: CrossoverKind) -> Self {
        self.crossover = kind;
        self
    }

    /// Sets the crossover rate (clamped to [0, 1]).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
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
        check_at_least("max_generations", self.max_generations, 1)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_config() {
        let config = Nsga2Config::new(10, 2);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.crossover, CrossoverKind::Uniform);
        assert!((config.crossover_rate - 0.9).abs() < 1e-12);
        assert!((config.mutation_rate - 0.02).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = Nsga2Config::new(10, 2).with_population_size(1);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_bits() {
        assert!(Nsga2Config::new(0, 2).validate().is_err());
    }

    #[test]
    fn test_validate_rate_out_of_range() {
        let mut config = Nsga2Config::new(10, 2);
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rate_setters_clamp() {
        let config = Nsga2Config::new(10, 2)
            .with_crossover_rate(2.0)
            .with_mutation_rate(-1.0);
        assert_eq!(config.crossover_rate, 1.0);
        assert_eq!(config.mutation_rate, 0.0);
    }
}
