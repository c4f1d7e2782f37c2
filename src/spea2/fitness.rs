//! Strength, raw fitness and k-th nearest neighbor density.

use super::types::Individual;
use crate::pareto::{dominates, DistanceMatrix};

/// Raw fitness of every point: the summed strength of its dominators.
///
/// The strength of a point is the number of points it dominates. A raw
/// fitness of 0 means no point dominates it.
///
/// # Example
///
/// ```
/// use u_moea::spea2::raw_fitness;
///
/// let objectives = vec![
///     vec![1.0, 4.0],
///     vec![2.0, 2.0],
///     vec![4.0, 1.0],
///     vec![3.0, 3.0],
/// ];
/// assert_eq!(raw_fitness(&objectives), vec![0, 0, 0, 1]);
/// ```
pub fn raw_fitness(objectives: &[Vec<f64>]) -> Vec<usize> {
    let n = objectives.len();
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut strength = vec![0usize; n];

    for i in 0..n {
        for j in 0..n {
            if i != j && dominates(&objectives[i], &objectives[j]) {
                strength[i] += 1;
                dominated_by[j].push(i);
            }
        }
    }

    dominated_by
        .iter()
        .map(|dominators| dominators.iter().map(|&d| strength[d]).sum())
        .collect()
}

/// Neighbor rank used for density: `floor(sqrt(n))`, at most `n - 1`.
pub(crate) fn density_rank(n: usize) -> usize {
    ((n as f64).sqrt().floor() as usize).min(n.saturating_sub(1))
}

/// Density of every point: `1 / (sigma_k + 2)`.
///
/// `sigma_k` is the entry at index `k = floor(sqrt(n))` of the point's
/// sorted distance row, where the row includes the zero distance to itself.
/// Every value lies in `(0, 0.5]`.
pub fn density(objectives: &[Vec<f64>]) -> Vec<f64> {
    let n = objectives.len();
    if n == 0 {
        return Vec::new();
    }
    let k = density_rank(n);
    let distances = DistanceMatrix::from_points(objectives);

    (0..n)
        .map(|i| {
            let mut row = distances.row(i).to_vec();
            row.sort_by(|a, b| a.total_cmp(b));
            1.0 / (row[k] + 2.0)
        })
        .collect()
}

/// Assigns `raw + density` to every individual in place.
pub fn assign_fitness(individuals: &mut [Individual]) {
    let objectives: Vec<Vec<f64>> = individuals.iter().map(|i| i.objectives.clone()).collect();
    let raw = raw_fitness(&objectives);
    let dens = density(&objectives);
    for ((ind, r), d) in individuals.iter_mut().zip(raw).zip(dens) {
        ind.fitness = r as f64 + d;
    }
}
