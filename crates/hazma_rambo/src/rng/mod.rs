//! # Random Number Generation Infrastructure
//!
//! Seeded random number generation for phase-space sampling.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; identical seeds give identical events
//! - **Injection**: The samplers accept any `rand::Rng`, so callers may pass their own
//!   generator; [`PhaseSpaceRng`] is the default seeded choice
//! - **Parallel streams**: [`PhaseSpaceRng::for_stream`] derives an independent
//!   generator per event, so parallel output does not depend on thread scheduling
//!
//! ## Usage Example
//!
//! ```rust
//! use hazma_rambo::rng::PhaseSpaceRng;
//!
//! let mut rng = PhaseSpaceRng::from_seed(12345);
//!
//! // Uniform values in [0, 1)
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::PhaseSpaceRng;
