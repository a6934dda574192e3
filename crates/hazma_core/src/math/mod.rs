//! Numerical methods shared by the sampling layer.
//!
//! - [`solvers`]: Root finding with explicit derivatives

pub mod solvers;
