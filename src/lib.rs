//! Evolutionary multi-objective optimization over fixed-length bit vectors.
//!
//! Provides three complete engines built on a shared Pareto kernel:
//!
//! - **NSGA-II**: elitist generational search ranked by non-dominated
//!   sorting and crowding distance.
//! - **MOEA/D**: decomposition into Chebyshev subproblems with random
//!   weight vectors and neighborhood mating.
//! - **SPEA2**: strength and k-th nearest neighbor density fitness with a
//!   bounded external archive.
//!
//! All objectives are minimized. The objective function is supplied by the
//! caller through [`BinaryProblem`]; the engines only see its output
//! vectors.
//!
//! # Example
//!
//! ```
//! use u_moea::nsga2::{Nsga2Config, Nsga2Runner};
//! use u_moea::{BinaryProblem, EvaluationError};
//!
//! // Maximize ones in the first half and zeros in the second half.
//! struct Split;
//!
//! impl BinaryProblem for Split {
//!     fn evaluate(&self, bits: &[bool]) -> Result<Vec<f64>, EvaluationError> {
//!         let half = bits.len() / 2;
//!         let ones = bits[..half].iter().filter(|&&b| b).count() as f64;
//!         let zeros = bits[half..].iter().filter(|&&b| !b).count() as f64;
//!         Ok(vec![-ones, -zeros])
//!     }
//! }
//!
//! let config = Nsga2Config::new(16, 2)
//!     .with_population_size(20)
//!     .with_max_generations(10)
//!     .with_seed(1);
//! let result = Nsga2Runner::run(&Split, &config).unwrap();
//! assert_eq!(result.solutions.len(), 20);
//! ```
//!
//! # Modules
//!
//! - [`pareto`]: dominance, non-dominated sorting, crowding, distances
//! - [`variation`]: crossover, mutation, deduplication, tournaments
//! - [`nsga2`], [`moead`], [`spea2`]: the engines

pub mod error;
pub(crate) mod evaluation;
pub mod moead;
pub mod nsga2;
pub mod pareto;
pub mod problem;
pub mod random;
pub mod spea2;
pub(crate) mod validate;
pub mod variation;

pub use error::{Error, Result};
pub use problem::{BinaryProblem, BitVector, EvaluationError, Normalization, Normalized};
pub use random::create_rng;
pub use variation::CrossoverKind;
