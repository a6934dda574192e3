//! Core kinematic and error types.
//!
//! This module provides:
//! - `four_momentum`: Relativistic four-vectors with Minkowski products
//! - `error`: Structured error types for solver operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`FourMomentum`] from `four_momentum`
//! - [`SolverError`] from `error`

pub mod error;
pub mod four_momentum;

// Re-export commonly used types at module level
pub use error::SolverError;
pub use four_momentum::FourMomentum;
