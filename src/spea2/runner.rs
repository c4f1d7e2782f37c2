//! SPEA2 archive loop.

use super::archive::environmental_selection;
use super::config::Spea2Config;
use super::fitness::assign_fitness;
use super::types::Individual;
use crate::error::Result;
use crate::evaluation::{evaluate_batch, initial_population};
use crate::pareto::non_dominated_indices;
use crate::problem::{BinaryProblem, BitVector};
use crate::random::rng_from_option;
use crate::variation::{bit_flip_mutation, fitness_tournament};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a SPEA2 run: the final archive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spea2Result {
    /// Decision vectors of the final archive.
    pub solutions: Vec<BitVector>,

    /// Objective vectors aligned with `solutions`.
    pub objectives: Vec<Vec<f64>>,

    /// Fitness of each archive member (below 1 for non-dominated members).
    pub fitness: Vec<f64>,

    /// Number of generations completed.
    pub generations: usize,

    /// Number of oracle calls made.
    pub evaluations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl Spea2Result {
    /// Indices of the non-dominated archive members.
    pub fn pareto_front(&self) -> Vec<usize> {
        non_dominated_indices(&self.objectives)
    }
}

/// Executes the SPEA2 algorithm.
pub struct Spea2Runner;

impl Spea2Runner {
    /// Runs SPEA2 optimization.
    pub fn run<P: BinaryProblem>(problem: &P, config: &Spea2Config) -> Result<Spea2Result> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SPEA2 with an optional cancellation token.
    ///
    /// The flag is checked at the start of every generation. When it is set
    /// the current archive is returned; before the first archive exists the
    /// evaluated initial population stands in for it.
    pub fn run_with_cancel<P: BinaryProblem>(
        problem: &P,
        config: &Spea2Config,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Spea2Result> {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let m = config.num_objectives;

        info!(
            population_size = config.population_size,
            archive_size = config.archive_size,
            num_bits = config.num_bits,
            num_objectives = m,
            max_generations = config.max_generations,
            "starting SPEA2"
        );

        let bits = initial_population(problem, config.num_bits, config.population_size, &mut rng)?;
        let mut population = evaluate_individuals(problem, bits, m, config.parallel)?;
        let mut evaluations = population.len();
        let mut archive: Vec<Individual> = Vec::new();

        let mut generations = 0usize;
        let mut cancelled = false;

        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Union and fitness
            let mut union = std::mem::take(&mut population);
            union.append(&mut archive);
            assign_fitness(&mut union);

            // Archive update
            let selected = environmental_selection(&union, config.archive_size);
            archive = selected.iter().map(|&i| union[i].clone()).collect();

            // Reproduction: tournament over archive fitness, mutation only
            let fitness: Vec<f64> = archive.iter().map(|ind| ind.fitness).collect();
            let offspring: Vec<BitVector> = (0..config.population_size)
                .map(|_| {
                    let parent = fitness_tournament(&fitness, &mut rng);
                    let mut child = archive[parent].bits.clone();
                    bit_flip_mutation(&mut child, config.mutation_rate, &mut rng);
                    child
                })
                .collect();
            population = evaluate_individuals(problem, offspring, m, config.parallel)?;
            evaluations += population.len();
            generations = gen + 1;

            debug!(
                generation = generations,
                union_size = union.len(),
                archive = archive.len(),
                non_dominated = fitness.iter().filter(|&&f| f < 1.0).count(),
                "SPEA2 generation complete"
            );
        }

        if archive.is_empty() {
            archive = population;
            assign_fitness(&mut archive);
        }

        if cancelled {
            warn!(generations, "SPEA2 cancelled; returning current archive");
        }
        info!(generations, evaluations, archive = archive.len(), "SPEA2 finished");

        let fitness = archive.iter().map(|ind| ind.fitness).collect();
        let (solutions, objectives) = archive
            .into_iter()
            .map(|ind| (ind.bits, ind.objectives))
            .unzip();

        Ok(Spea2Result {
            solutions,
            objectives,
            fitness,
            generations,
            evaluations,
            cancelled,
        })
    }
}

/// Evaluates a batch and wraps each vector as an unassigned individual.
fn evaluate_individuals<P: BinaryProblem>(
    problem: &P,
    batch: Vec<BitVector>,
    num_objectives: usize,
    parallel: bool,
) -> Result<Vec<Individual>> {
    let objectives = evaluate_batch(problem, &batch, num_objectives, parallel)?;
    Ok(batch
        .into_iter()
        .zip(objectives)
        .map(|(bits, objs)| Individual::new(bits, objs))
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
