//! RAMBO generator configuration.
//!
//! This module provides the configuration type and builder for the numerical
//! knobs of phase-space generation. Physical inputs (masses, energy, sample
//! size) are arguments of the generator, not configuration.

use hazma_core::math::solvers::SolverConfig;

use super::error::RamboError;

/// Default relative tolerance on the energy residual of the massive rescaling.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default Newton-Raphson iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Default number of events a worker thread must receive before the parallel
/// entry points actually fan out.
pub const DEFAULT_MIN_POINTS_PER_THREAD: usize = 256;

/// Phase-space generator configuration.
///
/// Immutable configuration validated at construction.
/// Use [`RamboConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use hazma_rambo::rambo::RamboConfig;
///
/// let config = RamboConfig::builder()
///     .tolerance(1e-13)
///     .max_iterations(30)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.max_iterations(), 30);
/// assert_eq!(RamboConfig::default().tolerance(), 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RamboConfig {
    /// Relative tolerance on `Σ Eᵢ / cme - 1`.
    tolerance: f64,
    /// Newton-Raphson iteration budget per event.
    max_iterations: usize,
    /// Minimum events per rayon worker before parallelising.
    min_points_per_thread: usize,
}

impl Default for RamboConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_points_per_thread: DEFAULT_MIN_POINTS_PER_THREAD,
        }
    }
}

impl RamboConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RamboConfigBuilder {
        RamboConfigBuilder::default()
    }

    /// Returns the relative energy tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the Newton-Raphson iteration budget.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the minimum number of events per worker thread.
    #[inline]
    pub fn min_points_per_thread(&self) -> usize {
        self.min_points_per_thread
    }

    /// Whether a request of `num_points` events is worth fanning out.
    #[inline]
    pub fn should_parallelise(&self, num_points: usize) -> bool {
        let n_threads = rayon::current_num_threads();
        n_threads > 1 && num_points >= self.min_points_per_thread.saturating_mul(n_threads)
    }

    /// Solver settings for the momentum-scale root find.
    #[inline]
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RamboError::InvalidParameter` if:
    /// - `tolerance` is not a positive finite number
    /// - `max_iterations` is 0
    /// - `min_points_per_thread` is 0
    pub fn validate(&self) -> Result<(), RamboError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RamboError::invalid(
                "tolerance",
                format!("must be positive and finite, got {}", self.tolerance),
            ));
        }
        if self.max_iterations == 0 {
            return Err(RamboError::invalid("max_iterations", "must be at least 1"));
        }
        if self.min_points_per_thread == 0 {
            return Err(RamboError::invalid(
                "min_points_per_thread",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Builder for [`RamboConfig`].
///
/// Unset fields fall back to the defaults.
#[derive(Clone, Debug, Default)]
pub struct RamboConfigBuilder {
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
    min_points_per_thread: Option<usize>,
}

impl RamboConfigBuilder {
    /// Sets the relative energy tolerance.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Sets the Newton-Raphson iteration budget.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the minimum number of events per worker thread.
    #[inline]
    pub fn min_points_per_thread(mut self, min_points_per_thread: usize) -> Self {
        self.min_points_per_thread = Some(min_points_per_thread);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RamboError::InvalidParameter` if any value is out of range.
    pub fn build(self) -> Result<RamboConfig, RamboError> {
        let config = RamboConfig {
            tolerance: self.tolerance.unwrap_or(DEFAULT_TOLERANCE),
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
            min_points_per_thread: self
                .min_points_per_thread
                .unwrap_or(DEFAULT_MIN_POINTS_PER_THREAD),
        };

        config.validate()?;
        Ok(config)
    }
}
