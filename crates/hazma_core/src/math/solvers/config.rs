//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Holds the convergence tolerance on `|f(x)|` and the iteration budget.
/// Callers that need a relative criterion should scale `f` themselves
/// (the RAMBO momentum rescaling divides its energy residual by the
/// centre-of-mass energy).
///
/// # Example
///
/// ```
/// use hazma_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// let custom = SolverConfig::new(1e-12, 30).with_max_iterations(40);
/// assert_eq!(custom.max_iterations, 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance: the solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of Newton steps before
    /// `SolverError::MaxIterationsExceeded` is returned.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: constant(1e-10),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Tight tolerance (1e-14) and a generous budget (500 iterations).
    pub fn high_precision() -> Self {
        Self {
            tolerance: constant(1e-14),
            max_iterations: 500,
        }
    }

    /// Relaxed tolerance (1e-6) and a short budget (50 iterations).
    pub fn fast() -> Self {
        Self {
            tolerance: constant(1e-6),
            max_iterations: 50,
        }
    }

    /// Returns a copy with the given tolerance.
    #[inline]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns a copy with the given iteration budget.
    #[inline]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::epsilon)
}
