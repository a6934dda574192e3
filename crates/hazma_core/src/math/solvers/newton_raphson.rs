//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder with an explicit derivative.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
///
/// Convergence is quadratic near a simple root. For convex, increasing
/// functions (such as the summed particle energies as a function of a common
/// momentum scale) the iteration overshoots at most once and then approaches
/// the root monotonically, so a handful of steps suffices from a reasonable
/// initial guess.
///
/// # Example
///
/// ```
/// use hazma_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Momentum scale ξ at which a 3 MeV particle and a massless one share 10 MeV,
/// // given unit-energy massless seeds: sqrt(9 + ξ²) + ξ = 10
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| (9.0 + x * x).sqrt() + x - 10.0;
/// let f_prime = |x: f64| x / (9.0 + x * x).sqrt() + 1.0;
///
/// let root = solver.find_root(f, f_prime, 4.0).unwrap();
/// assert!((root - 4.55).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let epsilon = T::min_positive_value().sqrt();

        for _iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);

            if f_prime_val.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            x = x - f_val / f_prime_val;

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x * x - 2.0;
        let f_prime = |x: f64| 2.0 * x;

        let root = solver.find_root(f, f_prime, 1.0).unwrap();
        assert!(
            (root - std::f64::consts::SQRT_2).abs() < 1e-10,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            root
        );
    }

    #[test]
    fn test_energy_sum_rescaling() {
        // Three particles with seed momenta (1, 2, 3) and masses (0.5, 0.0, 1.0)
        // rescaled so that the energies sum to 5.
        let masses = [0.5_f64, 0.0, 1.0];
        let seeds = [1.0_f64, 2.0, 3.0];
        let total = 5.0;

        let f = |xi: f64| {
            masses
                .iter()
                .zip(&seeds)
                .map(|(m, p)| (m * m + xi * xi * p * p).sqrt())
                .sum::<f64>()
                / total
                - 1.0
        };
        let f_prime = |xi: f64| {
            masses
                .iter()
                .zip(&seeds)
                .map(|(m, p)| xi * p * p / (m * m + xi * xi * p * p).sqrt())
                .sum::<f64>()
                / total
        };

        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-13, 50));
        let guess = (1.0 - (1.5_f64 / total).powi(2)).sqrt();
        let xi = solver.find_root(f, f_prime, guess).unwrap();

        assert!(xi > 0.0 && xi < 1.0);
        assert!(f(xi).abs() < 1e-13);
    }

    #[test]
    fn test_derivative_near_zero() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x * x * x + 1.0;
        let f_prime = |_x: f64| 0.0;

        match solver.find_root(f, f_prime, 0.5) {
            Err(SolverError::DerivativeNearZero { x }) => assert_eq!(x, 0.5),
            other => panic!("Expected DerivativeNearZero error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-100, 3));

        let f = |x: f64| x * x - 2.0;
        let f_prime = |x: f64| 2.0 * x;

        match solver.find_root(f, f_prime, 1.0) {
            Err(SolverError::MaxIterationsExceeded { iterations }) => assert_eq!(iterations, 3),
            other => panic!("Expected MaxIterationsExceeded error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_iterate() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x - 1e300;
        let f_prime = |_x: f64| 1e-10;

        assert!(matches!(
            solver.find_root(f, f_prime, 0.0),
            Err(SolverError::NumericalInstability(_))
        ));
    }

    #[test]
    fn test_with_defaults() {
        let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

        let root = solver.find_root(|x| x - 1.0, |_| 1.0, 0.0).unwrap();
        assert!((root - 1.0).abs() < 1e-10);
        assert_eq!(solver.config().max_iterations, 100);
    }

    #[test]
    fn test_with_f32() {
        let solver: NewtonRaphsonSolver<f32> = NewtonRaphsonSolver::new(SolverConfig::fast());

        let f = |x: f32| x * x - 2.0;
        let f_prime = |x: f32| 2.0 * x;

        let root = solver.find_root(f, f_prime, 1.0_f32).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }
}
