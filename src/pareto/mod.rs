//! Pareto dominance, ranking and diversity utilities.
//!
//! Domain-agnostic building blocks shared by all engines. Every function
//! treats objectives as **minimized**.
//!
//! # Algorithms
//!
//! - [`dominates`]: strict Pareto dominance predicate
//! - [`non_dominated_sort`]: fast non-dominated sorting (Deb et al., 2002)
//! - [`crowding_distance`]: per-front crowding distance
//! - [`DistanceMatrix`]: flat pairwise Euclidean distances in objective or weight space
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II",
//!   IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod crowding;
mod distance;
mod dominance;
mod sort;

pub use crowding::crowding_distance;
pub use distance::{euclidean_distance, DistanceMatrix};
pub use dominance::{dominance_cmp, dominates, non_dominated_indices, Dominance};
pub use sort::{non_dominated_sort, NondominatedSortResult};
