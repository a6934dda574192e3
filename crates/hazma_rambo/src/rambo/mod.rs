//! RAMBO phase-space generation.
//!
//! This module turns a list of final-state masses and a centre-of-mass
//! energy into weighted events uniformly covering N-body phase space, and
//! derives energy distributions and integral estimates from them.
//!
//! # Architecture
//!
//! ```text
//! Rambo
//! ├── RamboConfig      (solver tolerance, iteration budget, parallel cut-over)
//! ├── EventKernel      (per-call constants shared by every event)
//! └── Entry points
//!     ├── generate_point() / generate_phase_space[_with]()
//!     ├── generate_phase_space_par[_with]()      (rayon, per-event streams)
//!     └── generate_energy_histogram[s][_with]()
//!
//! PhaseSpacePoint ──► EnergyHistogram::from_points()
//!                 └─► WeightSummary::from_points()
//! ```
//!
//! # Example
//!
//! ```rust
//! use hazma_rambo::rambo::{Rambo, WeightSummary};
//! use hazma_rambo::rng::PhaseSpaceRng;
//!
//! // π⁺ π⁻ π⁰ at 1 GeV
//! let rambo = Rambo::new(vec![139.57, 139.57, 134.98]).unwrap();
//! let mut rng = PhaseSpaceRng::from_seed(42);
//!
//! let points = rambo.generate_phase_space(1000.0, 5_000, &mut rng).unwrap();
//! let volume = WeightSummary::from_points(&points).unwrap();
//! assert!(volume.mean > 0.0);
//!
//! let hists = rambo.generate_energy_histograms(1000.0, 5_000, 20, &mut rng).unwrap();
//! assert_eq!(hists.len(), 3);
//! ```

mod config;
mod error;
mod generator;
mod histogram;
mod parallel;
mod point;
mod summary;

pub use config::{
    RamboConfig, RamboConfigBuilder, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_POINTS_PER_THREAD,
    DEFAULT_TOLERANCE,
};
pub use error::{ErrorKind, RamboError};
pub use generator::{flat_matrix_element, Rambo};
pub use histogram::EnergyHistogram;
pub use point::PhaseSpacePoint;
pub use summary::WeightSummary;
