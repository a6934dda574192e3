//! # hazma_rambo: Monte-Carlo N-Body Phase Space
//!
//! ## Layer 2 Role
//!
//! hazma_rambo builds on the kinematic types of `hazma_core` to provide:
//! - The RAMBO generator for massless and massive final states (`rambo`)
//! - Seeded random number generation with per-event streams (`rng`)
//! - Weighted energy histograms and phase-space integral estimates
//! - Deterministic parallel generation over rayon
//!
//! ## Usage Example
//!
//! ```rust
//! use hazma_rambo::{EnergyHistogram, PhaseSpaceRng, Rambo};
//!
//! // μ⁻ → e⁻ ν̄ₑ ν_μ
//! let rambo = Rambo::new(vec![0.511, 0.0, 0.0]).unwrap();
//! let mut rng = PhaseSpaceRng::from_seed(2718);
//!
//! let points = rambo.generate_phase_space(105.66, 10_000, &mut rng).unwrap();
//! let electron = EnergyHistogram::from_points(&points, 0, 50).unwrap();
//!
//! // Electron energy never exceeds half the muon mass (plus m_e² correction)
//! assert!(*electron.edges.last().unwrap() < 53.0);
//! ```
//!
//! ## Logging
//!
//! Generation emits `tracing` events (`debug` per call, `trace` per massive
//! rescaling, `warn` on failure). The crate installs no subscriber.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for events, histograms and configuration

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rambo;
pub mod rng;

pub use rambo::{
    EnergyHistogram, ErrorKind, PhaseSpacePoint, Rambo, RamboConfig, RamboError, WeightSummary,
};
pub use rng::PhaseSpaceRng;
