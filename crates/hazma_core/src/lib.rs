//! # hazma_core: Kinematic Foundation for Phase-Space Sampling
//!
//! ## Layer 1 (Foundation) Role
//!
//! hazma_core serves as the bottom layer of the workspace, providing:
//! - Relativistic four-momentum value type (`types::four_momentum`)
//! - Error types: `SolverError` (`types::error`)
//! - Root-finding solvers: `NewtonRaphsonSolver`, `SolverConfig` (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other hazma_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derived error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use hazma_core::types::FourMomentum;
//!
//! // Two back-to-back photons in the rest frame of a 1 GeV system
//! let k1 = FourMomentum::new(500.0, 0.0, 0.0, 500.0);
//! let k2 = FourMomentum::new(500.0, 0.0, 0.0, -500.0);
//!
//! let total = k1 + k2;
//! assert_eq!(total.mass(), 1000.0);
//! assert_eq!(k1.mass_squared(), 0.0);
//! ```
//!
//! ## Conventions
//!
//! Natural units throughout (energies and masses in MeV). The Minkowski metric
//! is mostly-minus: `p·q = E_p E_q - p⃗·q⃗`.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `FourMomentum` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
