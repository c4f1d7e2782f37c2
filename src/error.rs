//! Error types.
//!
//! All fallible operations return [`Result<T>`](Result). Configuration
//! problems are reported by the `validate()` method of each config and
//! again by every runner before the first generation starts.

use crate::problem::EvaluationError;

/// Errors produced by the optimization engines.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when a decision vector does not have `num_bits` entries.
    #[error("decision vector length mismatch: expected {expected} bits, got {got}")]
    DecisionLengthMismatch {
        /// The configured number of bits.
        expected: usize,
        /// The length of the offending vector.
        got: usize,
    },

    /// Returned when the oracle produces the wrong number of objectives.
    #[error("objective length mismatch: expected {expected} values, got {got}")]
    ObjectiveLengthMismatch {
        /// The configured number of objectives.
        expected: usize,
        /// The number of values returned by the oracle.
        got: usize,
    },

    /// Returned when the oracle cannot evaluate a decision vector.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// Returned when a normalization vector is malformed.
    #[error("invalid normalization: {0}")]
    InvalidNormalization(String),
}

/// A convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
