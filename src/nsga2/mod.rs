//! NSGA-II: elitist non-dominated sorting genetic algorithm.
//!
//! Each generation produces `population_size` offspring by crowded binary
//! tournament, crossover and bit-flip mutation, merges them with the
//! parents, removes bit-identical clones, and keeps the best
//! `population_size` candidates by Pareto rank and crowding distance.
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: population size, operator rates, generation budget
//! - [`Nsga2Runner`]: executes the generational loop
//! - [`Nsga2Result`]: final population with objectives and ranks
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod runner;

pub use config::Nsga2Config;
pub use runner::{environmental_selection, Nsga2Result, Nsga2Runner};
