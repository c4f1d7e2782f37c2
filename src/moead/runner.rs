//! MOEA/D decomposition loop.

use super::config::MoeadConfig;
use super::weights::{neighborhoods, random_weights, tchebycheff};
use crate::error::Result;
use crate::evaluation::{evaluate_batch, evaluate_one, initial_population};
use crate::pareto::non_dominated_indices;
use crate::problem::{BinaryProblem, BitVector};
use crate::random::rng_from_option;
use crate::variation::{bit_flip_mutation, crossover, distinct_pair};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a MOEA/D run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoeadResult {
    /// Final population, one solution per weight vector.
    pub solutions: Vec<BitVector>,

    /// Objective vectors aligned with `solutions`.
    pub objectives: Vec<Vec<f64>>,

    /// Weight vector of each subproblem.
    pub weights: Vec<Vec<f64>>,

    /// Coordinate-wise minimum of every objective vector seen.
    pub ideal_point: Vec<f64>,

    /// Ideal point after initialization and after each generation.
    pub ideal_history: Vec<Vec<f64>>,

    /// Number of generations completed.
    pub generations: usize,

    /// Number of oracle calls made.
    pub evaluations: usize,

    /// Number of neighbor slots overwritten by offspring.
    pub replacements: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl MoeadResult {
    /// Indices of the non-dominated members of the final population.
    pub fn pareto_front(&self) -> Vec<usize> {
        non_dominated_indices(&self.objectives)
    }
}

/// Executes the MOEA/D algorithm with Chebyshev decomposition.
pub struct MoeadRunner;

impl MoeadRunner {
    /// Runs MOEA/D optimization.
    pub fn run<P: BinaryProblem>(problem: &P, config: &MoeadConfig) -> Result<MoeadResult> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs MOEA/D with an optional cancellation token.
    ///
    /// The flag is checked at the start of every generation. When it is
    /// set, the current population is returned with `cancelled = true`.
    pub fn run_with_cancel<P: BinaryProblem>(
        problem: &P,
        config: &MoeadConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<MoeadResult> {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let n = config.population_size;
        let m = config.num_objectives;

        info!(
            population_size = n,
            neighborhood_size = config.neighborhood_size,
            num_bits = config.num_bits,
            num_objectives = m,
            max_generations = config.max_generations,
            "starting MOEA/D"
        );

        // 1. Decomposition
        let weights = random_weights(n, m, &mut rng);
        let neighbors = neighborhoods(&weights, config.neighborhood_size);

        // 2. Population aligned with the weight vectors
        let mut population = initial_population(problem, config.num_bits, n, &mut rng)?;
        let mut objectives = evaluate_batch(problem, &population, m, config.parallel)?;
        let mut evaluations = population.len();

        let mut ideal = vec![f64::INFINITY; m];
        for objs in &objectives {
            update_ideal(&mut ideal, objs);
        }
        let mut ideal_history = Vec::with_capacity(config.max_generations + 1);
        ideal_history.push(ideal.clone());

        let mut replacements = 0usize;
        let mut generations = 0usize;
        let mut cancelled = false;

        // 3. Subproblem sweeps
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut gen_replacements = 0usize;
            for hood in &neighbors {
                let (a, b) = distinct_pair(hood.len(), &mut rng);
                let mut child = crossover(
                    config.crossover,
                    config.crossover_rate,
                    &population[hood[a]],
                    &population[hood[b]],
                    &mut rng,
                );
                bit_flip_mutation(&mut child, config.mutation_rate, &mut rng);

                let child_objectives = evaluate_one(problem, &child, m)?;
                evaluations += 1;
                update_ideal(&mut ideal, &child_objectives);

                gen_replacements += update_neighbors(
                    hood,
                    &child,
                    &child_objectives,
                    &weights,
                    &ideal,
                    &mut population,
                    &mut objectives,
                );
            }

            replacements += gen_replacements;
            ideal_history.push(ideal.clone());
            generations = gen + 1;

            debug!(
                generation = generations,
                replacements = gen_replacements,
                ideal = ?ideal,
                "MOEA/D generation complete"
            );
        }

        if cancelled {
            warn!(generations, "MOEA/D cancelled; returning current population");
        }
        info!(generations, evaluations, replacements, "MOEA/D finished");

        Ok(MoeadResult {
            solutions: population,
            objectives,
            weights,
            ideal_point: ideal,
            ideal_history,
            generations,
            evaluations,
            replacements,
            cancelled,
        })
    }
}

/// Lowers each coordinate of `ideal` to the matching objective if smaller.
fn update_ideal(ideal: &mut [f64], objectives: &[f64]) {
    for (z, &f) in ideal.iter_mut().zip(objectives) {
        if f < *z {
            *z = f;
        }
    }
}

/// Writes the child into every neighbor slot it does not worsen.
///
/// A slot is replaced when the child's Chebyshev value under that slot's
/// weight is less than or equal to the incumbent's. There is no cap, so a
/// single child may take over the whole neighborhood. Returns the number
/// of slots replaced.
fn update_neighbors(
    hood: &[usize],
    child: &[bool],
    child_objectives: &[f64],
    weights: &[Vec<f64>],
    ideal: &[f64],
    population: &mut [BitVector],
    objectives: &mut [Vec<f64>],
) -> usize {
    let mut replaced = 0;
    for &j in hood {
        let w = &weights[j];
        if tchebycheff(child_objectives, w, ideal) <= tchebycheff(&objectives[j], w, ideal) {
            population[j].clear();
            population[j].extend_from_slice(child);
            objectives[j].clear();
            objectives[j].extend_from_slice(child_objectives);
            replaced += 1;
        }
    }
    replaced
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::EvaluationError;
    use crate::Error;

    /// Three conflicting objectives over bit blocks.
    struct ThreeBlocks;

    impl BinaryProblem for ThreeBlocks {
        fn evaluate(&self, bits: &[bool]) -> std::result::Result<Vec<f64>, EvaluationError> {
            let n = bits.len();
            let ones = bits.iter().filter(|&&b| b).count() as f64;
            let head = bits[..n / 2].iter().filter(|&&b| b).count() as f64;
            let alternating = bits
                .iter()
                .enumerate()
                .filter(|(i, &b)| b != (i % 2 == 0))
                .count() as f64;
            Ok(vec![n as f64 - ones, ones - head + (n / 2) as f64 - head, alternating])
        }
    }

    struct Failing;

    impl BinaryProblem for Failing {
        fn evaluate(&self, _bits: &[bool]) -> std::result::Result<Vec<f64>, EvaluationError> {
            Err(EvaluationError::new("oracle offline"))
        }
    }

    fn config() -> MoeadConfig {
        MoeadConfig::new(16, 3)
            .with_population_size(30)
            .with_neighborhood_size(6)
            .with_max_generations(20)
            .with_seed(42)
            .with_parallel(false)
    }

    #[test]
    fn test_result_shape() {
        let result = MoeadRunner::run(&ThreeBlocks, &config()).unwrap();
        assert_eq!(result.solutions.len(), 30);
        assert_eq!(result.objectives.len(), 30);
        assert_eq!(result.weights.len(), 30);
        assert_eq!(result.generations, 20);
        assert_eq!(result.evaluations, 30 + 20 * 30);
        assert_eq!(result.ideal_history.len(), 21);
        assert!(!result.pareto_front().is_empty());
    }

    #[test]
    fn test_objectives_match_solutions() {
        let result = MoeadRunner::run(&ThreeBlocks, &config()).unwrap();
        for (bits, objs) in result.solutions.iter().zip(&result.objectives) {
            assert_eq!(&ThreeBlocks.evaluate(bits).unwrap(), objs);
        }
    }

    #[test]
    fn test_ideal_point_is_non_increasing() {
        let result = MoeadRunner::run(&ThreeBlocks, &config()).unwrap();
        for pair in result.ideal_history.windows(2) {
            for (next, prev) in pair[1].iter().zip(&pair[0]) {
                assert!(next <= prev, "ideal point increased: {prev} -> {next}");
            }
        }
        // and bounds every objective vector in the final population
        for objs in &result.objectives {
            for (f, z) in objs.iter().zip(&result.ideal_point) {
                assert!(z <= f);
            }
        }
    }

    #[test]
    fn test_weights_on_simplex() {
        let result = MoeadRunner::run(&ThreeBlocks, &config()).unwrap();
        for w in &result.weights {
            assert!(w.iter().all(|&x| x >= 0.0));
            assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_search_reaches_extreme_of_first_objective() {
        let result = MoeadRunner::run(
            &ThreeBlocks,
            &config().with_max_generations(80).with_population_size(40),
        )
        .unwrap();
        // objective 0 is minimized by all-ones and the ideal tracks it
        assert!(result.ideal_point[0] <= 3.0, "ideal {:?}", result.ideal_point);
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = MoeadRunner::run(&ThreeBlocks, &config()).unwrap();
        let b = MoeadRunner::run(&ThreeBlocks, &config().with_parallel(true)).unwrap();
        assert_eq!(a.solutions, b.solutions);
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.ideal_history, b.ideal_history);
        assert_eq!(a.replacements, b.replacements);
    }

    #[test]
    fn test_cancellation() {
        let cancel = Arc::new(AtomicBool::new(true));
        let result = MoeadRunner::run_with_cancel(&ThreeBlocks, &config(), Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.evaluations, 30);
        assert_eq!(result.solutions.len(), 30);
    }

    #[test]
    fn test_oracle_failure_propagates() {
        let err = MoeadRunner::run(&Failing, &config()).unwrap_err();
        assert!(matches!(err, Error::Evaluation(_)));
    }

    #[test]
    fn test_invalid_neighborhood_rejected() {
        let err = MoeadRunner::run(&ThreeBlocks, &config().with_neighborhood_size(31)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    fn slots(n: usize, objs: &[f64]) -> (Vec<BitVector>, Vec<Vec<f64>>) {
        (vec![vec![false; 4]; n], vec![objs.to_vec(); n])
    }

    fn even_weights(n: usize) -> Vec<Vec<f64>> {
        vec![vec![0.5, 0.5]; n]
    }

    #[test]
    fn test_tying_child_replaces_every_neighbor() {
        let (mut population, mut objectives) = slots(6, &[2.0, 3.0]);
        let child = vec![true; 4];
        let hood = [1, 2, 3, 4, 5];
        let replaced = update_neighbors(
            &hood,
            &child,
            &[3.0, 2.0],
            &even_weights(6),
            &[0.0, 0.0],
            &mut population,
            &mut objectives,
        );
        assert_eq!(replaced, 5);
        assert_eq!(population[0], vec![false; 4]);
        for &j in &hood {
            assert_eq!(population[j], child);
            assert_eq!(objectives[j], vec![3.0, 2.0]);
        }
    }

    #[test]
    fn test_better_child_replaces_several_neighbors() {
        let (mut population, mut objectives) = slots(5, &[4.0, 4.0]);
        objectives[2] = vec![1.0, 1.0];
        let child = vec![true, false, true, false];
        let replaced = update_neighbors(
            &[0, 1, 2, 3],
            &child,
            &[2.0, 2.0],
            &even_weights(5),
            &[0.0, 0.0],
            &mut population,
            &mut objectives,
        );
        assert_eq!(replaced, 3);
        assert_eq!(population[0], child);
        assert_eq!(population[1], child);
        assert_eq!(population[3], child);
        // better incumbent and slot outside the neighborhood are untouched
        assert_eq!(objectives[2], vec![1.0, 1.0]);
        assert_eq!(objectives[4], vec![4.0, 4.0]);
    }

    #[test]
    fn test_worse_child_replaces_nothing() {
        let (mut population, mut objectives) = slots(4, &[1.0, 1.0]);
        let replaced = update_neighbors(
            &[0, 1, 2, 3],
            &[true; 4],
            &[5.0, 1.0],
            &even_weights(4),
            &[0.0, 0.0],
            &mut population,
            &mut objectives,
        );
        assert_eq!(replaced, 0);
        assert!(population.iter().all(|bits| bits == &vec![false; 4]));
        assert!(objectives.iter().all(|o| o == &vec![1.0, 1.0]));
    }

    #[test]
    fn test_constant_objectives_replace_whole_neighborhoods() {
        struct Flat;

        impl BinaryProblem for Flat {
            fn evaluate(&self, _bits: &[bool]) -> std::result::Result<Vec<f64>, EvaluationError> {
                Ok(vec![1.0, 1.0])
            }
        }

        let config = MoeadConfig::new(8, 2)
            .with_population_size(10)
            .with_neighborhood_size(5)
            .with_max_generations(1)
            .with_seed(3)
            .with_parallel(false);
        let result = MoeadRunner::run(&Flat, &config).unwrap();
        assert_eq!(result.replacements, 10 * 5);
    }

    #[test]
    fn test_update_ideal() {
        let mut ideal = vec![f64::INFINITY, 2.0];
        update_ideal(&mut ideal, &[3.0, 5.0]);
        assert_eq!(ideal, vec![3.0, 2.0]);
        update_ideal(&mut ideal, &[4.0, 1.0]);
        assert_eq!(ideal, vec![3.0, 1.0]);
    }
}
