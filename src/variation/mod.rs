//! Variation operators over fixed-length bit vectors.
//!
//! Shared by all engines, each with its own parameterization:
//!
//! - NSGA-II: crowded binary tournament, uniform crossover, bit-flip mutation,
//!   deduplication of the merged pool
//! - MOEA/D: single-point crossover between neighbors, bit-flip mutation
//! - SPEA2: fitness binary tournament, bit-flip mutation only
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

mod operators;
mod selection;

pub use operators::{
    bit_flip_mutation, crossover, deduplicate, random_bits, single_point_crossover,
    uniform_crossover, CrossoverKind, Deduplicated,
};
pub use selection::{crowded_tournament, fitness_tournament};
pub(crate) use selection::distinct_pair;
