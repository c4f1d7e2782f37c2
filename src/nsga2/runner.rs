//! NSGA-II generational loop.
//!
//! [`Nsga2Runner`] orchestrates: rank → crowd → tournament → crossover →
//! mutation → merge and deduplicate → evaluate → environmental selection.

use super::config::Nsga2Config;
use crate::error::Result;
use crate::evaluation::{evaluate_batch, evaluate_indices, initial_population};
use crate::pareto::{crowding_distance, non_dominated_sort, NondominatedSortResult};
use crate::problem::{BinaryProblem, BitVector};
use crate::random::rng_from_option;
use crate::variation::{bit_flip_mutation, crossover, crowded_tournament, deduplicate};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Result {
    /// Final population.
    pub solutions: Vec<BitVector>,

    /// Objective vectors aligned with `solutions`.
    pub objectives: Vec<Vec<f64>>,

    /// Pareto rank of each solution within the final population.
    pub ranks: Vec<usize>,

    /// Number of generations completed.
    pub generations: usize,

    /// Number of oracle calls made.
    pub evaluations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Size of the first front at the end of each generation
    /// (index 0 is the initial population).
    pub front_size_history: Vec<usize>,
}

impl Nsga2Result {
    /// Indices of the non-dominated members of the final population.
    pub fn pareto_front(&self) -> Vec<usize> {
        self.ranks
            .iter()
            .enumerate()
            .filter(|(_, &r)| r == 0)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Executes the NSGA-II algorithm.
///
/// # Usage
///
/// ```
/// use u_moea::nsga2::{Nsga2Config, Nsga2Runner};
/// use u_moea::{BinaryProblem, EvaluationError};
///
/// struct OnesVsZeros;
///
/// impl BinaryProblem for OnesVsZeros {
///     fn evaluate(&self, bits: &[bool]) -> Result<Vec<f64>, EvaluationError> {
///         let ones = bits.iter().filter(|&&b| b).count() as f64;
///         Ok(vec![ones, bits.len() as f64 - ones])
///     }
/// }
///
/// let config = Nsga2Config::new(8, 2)
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_seed(42);
/// let result = Nsga2Runner::run(&OnesVsZeros, &config).unwrap();
/// assert_eq!(result.solutions.len(), 20);
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs NSGA-II optimization.
    pub fn run<P: BinaryProblem>(problem: &P, config: &Nsga2Config) -> Result<Nsga2Result> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs NSGA-II with an optional cancellation token.
    ///
    /// The flag is checked at the start of every generation. When it is
    /// set, the current population is returned with `cancelled = true`.
    pub fn run_with_cancel<P: BinaryProblem>(
        problem: &P,
        config: &Nsga2Config,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Nsga2Result> {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let pop_size = config.population_size;
        let m = config.num_objectives;

        info!(
            population_size = pop_size,
            num_bits = config.num_bits,
            num_objectives = m,
            max_generations = config.max_generations,
            "starting NSGA-II"
        );

        // 1. Initialize and evaluate
        let mut population = initial_population(problem, config.num_bits, pop_size, &mut rng)?;
        let mut objectives = evaluate_batch(problem, &population, m, config.parallel)?;
        let mut evaluations = population.len();

        let mut sorted = non_dominated_sort(&objectives);
        let mut front_size_history = Vec::with_capacity(config.max_generations + 1);
        front_size_history.push(sorted.fronts[0].len());

        let mut generations = 0usize;
        let mut cancelled = false;

        // 2. Generational loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Crowding per front, indexed by population position
            let crowding = crowding_by_position(&sorted, &objectives);

            // Offspring via crowded tournament + variation
            let mut pool: Vec<BitVector> = Vec::with_capacity(2 * pop_size);
            let offspring: Vec<BitVector> = (0..pop_size)
                .map(|_| {
                    let p1 = crowded_tournament(&sorted.ranks, &crowding, &mut rng);
                    let p2 = crowded_tournament(&sorted.ranks, &crowding, &mut rng);
                    let mut child = crossover(
                        config.crossover,
                        config.crossover_rate,
                        &population[p1],
                        &population[p2],
                        &mut rng,
                    );
                    bit_flip_mutation(&mut child, config.mutation_rate, &mut rng);
                    child
                })
                .collect();

            // Merge parents and offspring, dropping clones
            let parent_count = population.len();
            pool.append(&mut population);
            pool.extend(offspring);
            let dedup = deduplicate(&pool);

            // Parents keep their cached objectives; only new offspring hit the oracle
            let new_offspring: Vec<usize> = dedup
                .unique
                .iter()
                .copied()
                .filter(|&i| i >= parent_count)
                .collect();
            let new_objectives =
                evaluate_indices(problem, &pool, &new_offspring, m, config.parallel)?;
            evaluations += new_objectives.len();

            let mut new_objectives = new_objectives.into_iter();
            let mut old_objectives = objectives.into_iter().map(Some).collect::<Vec<_>>();
            let candidate_objectives: Vec<Vec<f64>> = dedup
                .unique
                .iter()
                .map(|&i| {
                    if i < parent_count {
                        old_objectives[i]
                            .take()
                            .expect("each parent appears at most once among unique indices")
                    } else {
                        new_objectives
                            .next()
                            .expect("one evaluation per unique offspring")
                    }
                })
                .collect();

            // Environmental selection over the distinct candidates
            let selected = environmental_selection(&candidate_objectives, pop_size);
            let mut next_population = Vec::with_capacity(pop_size);
            let mut next_objectives = Vec::with_capacity(pop_size);
            for &pos in &selected {
                next_population.push(pool[dedup.unique[pos]].clone());
                next_objectives.push(candidate_objectives[pos].clone());
            }

            // Too few distinct vectors: refill with clones in pool order
            for &(repeat, first) in &dedup.duplicates {
                if next_population.len() >= pop_size {
                    break;
                }
                let pos = dedup
                    .unique
                    .binary_search(&first)
                    .expect("first occurrence is always a unique index");
                next_population.push(pool[repeat].clone());
                next_objectives.push(candidate_objectives[pos].clone());
            }

            population = next_population;
            objectives = next_objectives;
            sorted = non_dominated_sort(&objectives);
            front_size_history.push(sorted.fronts[0].len());
            generations = gen + 1;

            debug!(
                generation = generations,
                fronts = sorted.fronts.len(),
                first_front = sorted.fronts[0].len(),
                distinct = dedup.unique.len(),
                evaluated = new_offspring.len(),
                "NSGA-II generation complete"
            );
        }

        if cancelled {
            warn!(generations, "NSGA-II cancelled; returning current population");
        }
        info!(generations, evaluations, "NSGA-II finished");

        Ok(Nsga2Result {
            solutions: population,
            objectives,
            ranks: sorted.ranks,
            generations,
            evaluations,
            cancelled,
            front_size_history,
        })
    }
}

/// Crowding distance for every individual, computed front by front.
fn crowding_by_position(sorted: &NondominatedSortResult, objectives: &[Vec<f64>]) -> Vec<f64> {
    let mut crowding = vec![0.0; objectives.len()];
    for front in &sorted.fronts {
        let distances = crowding_distance(front, objectives);
        for (&i, d) in front.iter().zip(distances) {
            crowding[i] = d;
        }
    }
    crowding
}

/// NSGA-II environmental selection.
///
/// Fills up to `target` slots front by front in rank order. The first
/// front that does not fit is sorted by descending crowding distance
/// (stable, so equal distances keep front order) and cut to fill the
/// remaining slots exactly. Returns positions into `objectives`; fewer than
/// `target` only when `objectives` itself is smaller.
///
/// # Example
///
/// ```
/// use u_moea::nsga2::environmental_selection;
///
/// let objectives = vec![
///     vec![0.0, 4.0],
///     vec![1.0, 3.0],
///     vec![2.0, 2.0],
///     vec![4.0, 0.0],
///     vec![5.0, 5.0],
/// ];
/// let selected = environmental_selection(&objectives, 3);
/// assert_eq!(selected.len(), 3);
/// assert!(!selected.contains(&4));
/// ```
pub fn environmental_selection(objectives: &[Vec<f64>], target: usize) -> Vec<usize> {
    let sorted = non_dominated_sort(objectives);
    let mut selected = Vec::with_capacity(target.min(objectives.len()));

    for front in &sorted.fronts {
        let remaining = target - selected.len();
        if remaining == 0 {
            break;
        }
        if front.len() <= remaining {
            selected.extend_from_slice(front);
            continue;
        }

        let distances = crowding_distance(front, objectives);
        let mut order: Vec<usize> = (0..front.len()).collect();
        order.sort_by(|&a, &b| {
            distances[b]
                .partial_cmp(&distances[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        selected.extend(order.into_iter().take(remaining).map(|k| front[k]));
        break;
    }

    selected
}

// ============================================================================
// Tests
// ============================================================================
