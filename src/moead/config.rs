//! MOEA/D configuration.

use crate::error::{Error, Result};
use crate::validate::{check_at_least, check_dimensions, check_rate};
use crate::variation::CrossoverKind;

/// Configuration for the MOEA/D engine.
///
/// `population_size` is also the number of weight vectors (subproblems).
/// Each subproblem mates and replaces only within its
/// `neighborhood_size` nearest weight vectors.
///
/// # Examples
///
/// ```
/// use u_moea::moead::MoeadConfig;
///
/// let config = MoeadConfig::new(30, 3)
///     .with_population_size(60)
///     .with_neighborhood_size(10)
///     .with_max_generations(100);
/// assert!(config.validate().is_ok());
///
/// let bad = MoeadConfig::new(30, 3)
///     .with_population_size(5)
///     .with_neighborhood_size(6);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoeadConfig {
    /// Length of every decision vector.
    pub num_bits: usize,

    /// Number of objectives (dimension of the weight vectors).
    pub num_objectives: usize,

    /// Number of subproblems, weight vectors and population slots.
    pub population_size: usize,

    /// Number of nearest weight vectors per neighborhood, self included.
    ///
    /// Must be in `[2, population_size]` so two distinct mates exist.
    pub neighborhood_size: usize,

    /// Number of generations; each generation visits every subproblem once.
    pub max_generations: usize,

    /// Recombination operator for the two neighborhood mates.
    pub crossover: CrossoverKind,

    /// Probability that a crossover event fires.
    pub crossover_rate: f64,

    /// Per-bit flip probability.
    pub mutation_rate: f64,

    /// Whether to evaluate the initial population in parallel using rayon.
    ///
    /// Offspring are evaluated one at a time because every replacement
    /// step feeds the next subproblem.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl MoeadConfig {
    /// Creates a configuration for the given problem dimensions.
    pub fn new(num_bits: usize, num_objectives: usize) -> Self {
        Self {
            num_bits,
            num_objectives,
            population_size: 100,
            neighborhood_size: 20,
            max_generations: 200,
            crossover: CrossoverKind::SinglePoint,
            crossover_rate: 0.9,
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

    /// Sets the neighborhood size.
    pub fn with_neighborhood_size(mut self, t: usize) -> Self {
        self.neighborhood_size = t;
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
        check_at_least("neighborhood_size", self.neighborhood_size, 2)?;
        if self.neighborhood_size > self.population_size {
            return Err(Error::InvalidConfig(format!(
                "neighborhood_size ({}) must not exceed population_size ({})",
                self.neighborhood_size, self.population_size
            )));
        }
        check_at_least("max_generations", self.max_generations, 1)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MoeadConfig::new(12, 3);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.neighborhood_size, 20);
        assert_eq!(config.crossover, CrossoverKind::SinglePoint);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_neighborhood_bounds() {
        let base = MoeadConfig::new(12, 2).with_population_size(10);
        assert!(base.clone().with_neighborhood_size(0).validate().is_err());
        assert!(base.clone().with_neighborhood_size(1).validate().is_err());
        assert!(base.clone().with_neighborhood_size(2).validate().is_ok());
        assert!(base.clone().with_neighborhood_size(10).validate().is_ok());
        assert!(base.with_neighborhood_size(11).validate().is_err());
    }

    #[test]
    fn test_zero_population() {
        let config = MoeadConfig::new(12, 2)
            .with_population_size(0)
            .with_neighborhood_size(0);
        assert!(config.validate().is_err());
    }
}
