//! Error types for the RAMBO phase-space generator.
//!
//! Every failure belongs to one of three classes, reported by
//! [`RamboError::kind`]:
//!
//! - [`ErrorKind::Validation`]: malformed input, raised before any sampling
//! - [`ErrorKind::Kinematic`]: centre-of-mass energy at or below threshold
//! - [`ErrorKind::NumericalConvergence`]: the momentum rescaling did not converge

use hazma_core::types::SolverError;
use thiserror::Error;

/// Broad classification of a [`RamboError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed inputs; no random numbers were drawn.
    Validation,
    /// No phase space exists for the requested energy.
    Kinematic,
    /// The massive rescaling failed for some event.
    NumericalConvergence,
}

/// Errors raised by phase-space generation.
///
/// # Examples
///
/// ```
/// use hazma_rambo::rambo::{ErrorKind, RamboError};
///
/// let err = RamboError::BelowThreshold { cme: 100.0, threshold: 279.1 };
/// assert_eq!(err.kind(), ErrorKind::Kinematic);
/// assert!(err.to_string().contains("below threshold"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RamboError {
    /// Fewer than two final-state particles.
    #[error("Too few final-state particles: need at least 2, got {0}")]
    TooFewParticles(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Particle index outside `0..count`.
    #[error("Particle index {index} out of range for {count} final-state particles")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of final-state particles.
        count: usize,
    },

    /// Centre-of-mass energy does not exceed the sum of the masses.
    #[error("Centre-of-mass energy {cme} is below threshold {threshold}")]
    BelowThreshold {
        /// Requested centre-of-mass energy.
        cme: f64,
        /// Sum of the final-state masses.
        threshold: f64,
    },

    /// Newton-Raphson solve for the momentum scale failed.
    #[error("Momentum rescaling failed: {0}")]
    Convergence(#[from] SolverError),

    /// Squared matrix element was negative or not finite.
    #[error("Squared matrix element must be finite and non-negative, got {value}")]
    InvalidMatrixElement {
        /// Offending value.
        value: f64,
    },

    /// All events carried zero weight, so no distribution can be normalised.
    #[error("Total event weight is zero")]
    ZeroTotalWeight,
}

impl RamboError {
    /// Maps the error onto its class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooFewParticles(_)
            | Self::InvalidParameter { .. }
            | Self::IndexOutOfRange { .. }
            | Self::InvalidMatrixElement { .. }
            | Self::ZeroTotalWeight => ErrorKind::Validation,
            Self::BelowThreshold { .. } => ErrorKind::Kinematic,
            Self::Convergence(_) => ErrorKind::NumericalConvergence,
        }
    }

    /// Create an invalid parameter error.
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
