//! Batch evaluation and population initialization shared by the engines.
//!
//! Evaluation is the only parallel seam: a batch of decision vectors is
//! sent to the oracle (optionally on rayon) and the results come back in
//! input order, so ranking and selection see the same positions whether
//! or not the batch ran in parallel.

use crate::error::{Error, Result};
use crate::problem::{BinaryProblem, BitVector};
use crate::variation::random_bits;
use rand::Rng;
use rayon::prelude::*;

/// Evaluates a single vector and checks the objective count.
pub(crate) fn evaluate_one<P: BinaryProblem>(
    problem: &P,
    bits: &[bool],
    num_objectives: usize,
) -> Result<Vec<f64>> {
    let values = problem.evaluate(bits)?;
    if values.len() != num_objectives {
        return Err(Error::ObjectiveLengthMismatch {
            expected: num_objectives,
            got: values.len(),
        });
    }
    Ok(values)
}

/// Evaluates every vector in `batch`, preserving order.
///
/// The first failure aborts the batch.
pub(crate) fn evaluate_batch<P: BinaryProblem>(
    problem: &P,
    batch: &[BitVector],
    num_objectives: usize,
    parallel: bool,
) -> Result<Vec<Vec<f64>>> {
    if parallel {
        batch
            .par_iter()
            .map(|bits| evaluate_one(problem, bits, num_objectives))
            .collect()
    } else {
        batch
            .iter()
            .map(|bits| evaluate_one(problem, bits, num_objectives))
            .collect()
    }
}

/// Evaluates `pool[i]` for every `i` in `indices`, preserving the order of
/// `indices`.
pub(crate) fn evaluate_indices<P: BinaryProblem>(
    problem: &P,
    pool: &[BitVector],
    indices: &[usize],
    num_objectives: usize,
    parallel: bool,
) -> Result<Vec<Vec<f64>>> {
    if parallel {
        indices
            .par_iter()
            .map(|&i| evaluate_one(problem, &pool[i], num_objectives))
            .collect()
    } else {
        indices
            .iter()
            .map(|&i| evaluate_one(problem, &pool[i], num_objectives))
            .collect()
    }
}

/// Builds `size` starting vectors, preferring [`BinaryProblem::seed_solution`]
/// and falling back to uniformly random bits.
pub(crate) fn initial_population<P: BinaryProblem, R: Rng>(
    problem: &P,
    num_bits: usize,
    size: usize,
    rng: &mut R,
) -> Result<Vec<BitVector>> {
    (0..size)
        .map(|_| match problem.seed_solution(rng) {
            Some(bits) if bits.len() != num_bits => Err(Error::DecisionLengthMismatch {
                expected: num_bits,
                got: bits.len(),
            }),
            Some(bits) => Ok(bits),
            None => Ok(random_bits(num_bits, rng)),
        })
        .collect()
}
