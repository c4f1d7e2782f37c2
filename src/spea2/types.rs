//! Archive record for SPEA2.

use crate::problem::BitVector;

/// A decision vector with its objective vector and SPEA2 fitness.
///
/// `fitness` is recomputed from scratch every generation over the union of
/// population and archive. [`f64::INFINITY`] marks a value that has not been
/// assigned yet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Decision vector.
    pub bits: BitVector,

    /// Objective vector returned by the oracle for `bits`.
    pub objectives: Vec<f64>,

    /// Raw fitness plus density; below 1 exactly when non-dominated.
    pub fitness: f64,
}

impl Individual {
    /// Creates an individual with unassigned fitness.
    pub fn new(bits: BitVector, objectives: Vec<f64>) -> Self {
        Self {
            bits,
            objectives,
            fitness: f64::INFINITY,
        }
    }

    /// Whether fitness has been assigned since creation.
    pub fn has_fitness(&self) -> bool {
        self.fitness.is_finite()
    }

    /// Whether the individual is an archive candidate (fitness below 1).
    ///
    /// Raw fitness is an integer and density lies in `(0, 0.5]`, so this
    /// holds exactly for members no other union member dominates.
    pub fn is_non_dominated(&self) -> bool {
        self.fitness < 1.0
    }
}
