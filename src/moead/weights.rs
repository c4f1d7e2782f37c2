//! Weight vectors, neighborhoods and Chebyshev scalarization.

use crate::pareto::DistanceMatrix;
use rand::Rng;

/// Draws `n` random weight vectors on the `m`-dimensional probability simplex.
///
/// Every entry is sampled uniformly from `[0, 1)` and each row is divided by
/// its sum. A row that sums to zero is redrawn.
pub fn random_weights<R: Rng>(n: usize, m: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| loop {
            let mut row: Vec<f64> = (0..m).map(|_| rng.random_range(0.0..1.0)).collect();
            let sum: f64 = row.iter().sum();
            if sum > 0.0 {
                row.iter_mut().for_each(|w| *w /= sum);
                break row;
            }
        })
        .collect()
}

/// The `t` nearest weight vectors of every weight vector.
///
/// Distances are Euclidean in weight space. Each neighborhood starts with
/// the vector itself, followed by the others in ascending distance (ties
/// broken by index).
///
/// # Panics
/// Panics if `t > weights.len()`.
pub fn neighborhoods(weights: &[Vec<f64>], t: usize) -> Vec<Vec<usize>> {
    let n = weights.len();
    assert!(t <= n, "neighborhood size exceeds number of weight vectors");

    let distances = DistanceMatrix::from_points(weights);
    (0..n)
        .map(|i| {
            let row = distances.row(i);
            let mut order: Vec<usize> = (0..n).collect();
            order.sort_by(|&a, &b| {
                (a != i)
                    .cmp(&(b != i))
                    .then_with(|| {
                        row[a]
                            .partial_cmp(&row[b])
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
            });
            order.truncate(t);
            order
        })
        .collect()
}

/// Chebyshev (Tchebycheff) scalarization: `max_k w[k] * |f[k] - z[k]|`.
///
/// Lower is better.
///
/// # Example
///
/// ```
/// use u_moea::moead::tchebycheff;
///
/// let value = tchebycheff(&[3.0, 1.0], &[0.5, 0.5], &[1.0, 0.0]);
/// assert_eq!(value, 1.0);
/// ```
pub fn tchebycheff(objectives: &[f64], weight: &[f64], ideal: &[f64]) -> f64 {
    objectives
        .iter()
        .zip(weight)
        .zip(ideal)
        .map(|((&f, &w), &z)| w * (f - z).abs())
        .fold(0.0, f64::max)
}
