//! MOEA/D: multi-objective evolutionary algorithm based on decomposition.
//!
//! The problem is split into `population_size` scalar subproblems, one per
//! random weight vector on the probability simplex. Each subproblem holds
//! one solution and cooperates with its `neighborhood_size` nearest
//! subproblems: mates are drawn from the neighborhood and a child replaces
//! every neighbor whose Chebyshev value it does not worsen.
//!
//! # References
//!
//! - Zhang & Li (2007), *MOEA/D: A Multiobjective Evolutionary Algorithm
//!   Based on Decomposition*

mod config;
mod runner;
mod weights;

pub use config::MoeadConfig;
pub use runner::{MoeadResult, MoeadRunner};
pub use weights::{neighborhoods, random_weights, tchebycheff};
