//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Root-finding solver errors.
///
/// Provides structured error handling for iterative solvers with
/// the diagnostic value at which each failure was detected.
///
/// # Variants
/// - `MaxIterationsExceeded`: Iteration budget exhausted before convergence
/// - `DerivativeNearZero`: Newton step undefined (flat function)
/// - `NumericalInstability`: Iterate became NaN or infinite
///
/// # Examples
/// ```
/// use hazma_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 50 };
/// assert!(format!("{}", err).contains("50 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}
