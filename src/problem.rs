//! The evaluation oracle contract.
//!
//! An optimization problem is anything that maps a fixed-length bit vector
//! to a vector of objective values. All objectives are **minimized**.
//! The engines never look inside the oracle; they only rely on it being
//! pure and deterministic for a fixed input.

use crate::error::{Error, Result};
use rand::Rng;

/// A binary decision vector. `true` means the bit is set.
pub type BitVector = Vec<bool>;

/// Failure reported by an oracle for a specific decision vector.
///
/// Engines propagate this immediately; a missing evaluation is never
/// replaced by a default objective vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("evaluation failed: {message}")]
pub struct EvaluationError {
    message: String,
}

impl EvaluationError {
    /// Creates an evaluation error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied by the oracle.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Defines a multi-objective problem over bit vectors.
///
/// # Thread Safety
///
/// `BinaryProblem` must be `Send + Sync` because engines may evaluate a
/// batch of decision vectors in parallel using rayon.
///
/// # Implementing
///
/// ```
/// use u_moea::{BinaryProblem, EvaluationError};
///
/// /// Trade-off between number of set bits and number of clear bits.
/// struct OnesVsZeros;
///
/// impl BinaryProblem for OnesVsZeros {
///     fn evaluate(&self, bits: &[bool]) -> Result<Vec<f64>, EvaluationError> {
///         let ones = bits.iter().filter(|&&b| b).count() as f64;
///         Ok(vec![ones, bits.len() as f64 - ones])
///     }
/// }
/// ```
pub trait BinaryProblem: Send + Sync {
    /// Evaluates a decision vector and returns its objective values.
    ///
    /// Must be total over every bit pattern of the configured length,
    /// including all-zero and all-one vectors. Lower is better.
    fn evaluate(&self, bits: &[bool]) -> std::result::Result<Vec<f64>, EvaluationError>;

    /// Supplies a custom initial decision vector.
    ///
    /// Override this to seed the initial population with heuristic
    /// solutions. The default returns `None` (uniformly random bits).
    /// A seeded vector with the wrong length aborts the run with
    /// [`Error::DecisionLengthMismatch`].
    fn seed_solution<R: Rng>(&self, _rng: &mut R) -> Option<BitVector> {
        None
    }
}

/// Affine per-objective rescaling: `y[k] = x[k] / scale[k] + offset[k]`.
///
/// Every `scale[k]` must be strictly positive, so the mapping is monotonic
/// in each objective and dominance relations are unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normalization {
    scale: Vec<f64>,
    offset: Vec<f64>,
}

impl Normalization {
    /// Creates a normalization with explicit scales and offsets.
    pub fn new(scale: Vec<f64>, offset: Vec<f64>) -> Result<Self> {
        if scale.is_empty() {
            return Err(Error::InvalidNormalization(
                "scale vector must not be empty".into(),
            ));
        }
        if scale.len() != offset.len() {
            return Err(Error::InvalidNormalization(format!(
                "scale has {} entries but offset has {}",
                scale.len(),
                offset.len()
            )));
        }
        if let Some((k, s)) = scale
            .iter()
            .enumerate()
            .find(|(_, &s)| !(s.is_finite() && s > 0.0))
        {
            return Err(Error::InvalidNormalization(format!(
                "scale[{k}] = {s} must be finite and positive"
            )));
        }
        if offset.iter().any(|o| !o.is_finite()) {
            return Err(Error::InvalidNormalization(
                "offsets must be finite".into(),
            ));
        }
        Ok(Self { scale, offset })
    }

    /// Divides each objective by the matching scale, without offset.
    pub fn scale_only(scale: Vec<f64>) -> Result<Self> {
        let offset = vec![0.0; scale.len()];
        Self::new(scale, offset)
    }

    /// Number of objectives this normalization applies to.
    pub fn len(&self) -> usize {
        self.scale.len()
    }

    /// Always `false`; an empty normalization cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.scale.is_empty()
    }

    /// Rescales one objective vector in place.
    pub fn apply(&self, values: &mut [f64]) {
        for ((v, s), o) in values.iter_mut().zip(&self.scale).zip(&self.offset) {
            *v = *v / s + o;
        }
    }
}

/// Wraps an oracle and normalizes every objective vector it returns.
#[derive(Debug, Clone)]
pub struct Normalized<P> {
    inner: P,
    normalization: Normalization,
}

impl<P: BinaryProblem> Normalized<P> {
    /// Wraps `inner` so that all of its outputs pass through `normalization`.
    pub fn new(inner: P, normalization: Normalization) -> Self {
        Self {
            inner,
            normalization,
        }
    }

    /// The wrapped oracle.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// The normalization applied to every evaluation.
    pub fn normalization(&self) -> &Normalization {
        &self.normalization
    }
}

impl<P: BinaryProblem> BinaryProblem for Normalized<P> {
    fn evaluate(&self, bits: &[bool]) -> std::result::Result<Vec<f64>, EvaluationError> {
        let mut values = self.inner.evaluate(bits)?;
        if values.len() != self.normalization.len() {
            return Err(EvaluationError::new(format!(
                "normalization covers {} objectives but the oracle returned {}",
                self.normalization.len(),
                values.len()
            )));
        }
        self.normalization.apply(&mut values);
        Ok(values)
    }

    fn seed_solution<R: Rng>(&self, rng: &mut R) -> Option<BitVector> {
        self.inner.seed_solution(rng)
    }
}
