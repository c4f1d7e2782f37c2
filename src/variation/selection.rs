//! Binary tournament selection.
//!
//! Both tournaments draw two **distinct** candidates uniformly without
//! replacement. When the comparison is tied the first-sampled candidate
//! wins, so the outcome never depends on iteration order.

use rand::Rng;

/// Crowded-comparison tournament (NSGA-II).
///
/// Lower rank wins; on equal rank the larger crowding distance wins; on a
/// further tie the first-sampled candidate wins.
///
/// # Panics
/// Panics if fewer than two candidates are given or if `ranks` and
/// `crowding` differ in length.
pub fn crowded_tournament<R: Rng>(ranks: &[usize], crowding: &[f64], rng: &mut R) -> usize {
    assert_eq!(ranks.len(), crowding.len(), "ranks and crowding must align");
    assert!(ranks.len() >= 2, "tournament needs at least two candidates");

    let (first, second) = distinct_pair(ranks.len(), rng);
    if ranks[second] < ranks[first] {
        second
    } else if ranks[first] < ranks[second] {
        first
    } else if crowding[second] > crowding[first] {
        second
    } else {
        first
    }
}

/// Scalar-fitness tournament (SPEA2): lower fitness wins, ties go to the
/// first-sampled candidate.
///
/// A pool with a single candidate always returns index 0.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn fitness_tournament<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty pool");
    if fitness.len() == 1 {
        return 0;
    }

    let (first, second) = distinct_pair(fitness.len(), rng);
    if fitness[second] < fitness[first] {
        second
    } else {
        first
    }
}

/// Draws two distinct indices from `0..n`, uniformly without replacement.
pub(crate) fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 2);
    let first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}
