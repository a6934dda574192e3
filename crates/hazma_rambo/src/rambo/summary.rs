//! Monte-Carlo estimate of the phase-space integral.

use super::error::RamboError;
use super::point::PhaseSpacePoint;

/// Mean event weight and its standard error.
///
/// With a flat matrix element the mean weight estimates the phase-space
/// volume; otherwise it estimates `∫ |M|² dΦ`.
///
/// # Examples
///
/// ```rust
/// use hazma_rambo::rambo::{Rambo, WeightSummary};
/// use hazma_rambo::rng::PhaseSpaceRng;
///
/// let rambo = Rambo::new(vec![0.0, 0.0]).unwrap();
/// let mut rng = PhaseSpaceRng::from_seed(2);
/// let points = rambo.generate_phase_space(10.0, 100, &mut rng).unwrap();
///
/// let summary = WeightSummary::from_points(&points).unwrap();
/// // Two-body massless phase space is 1 / 8π for every energy.
/// assert!((summary.mean - 1.0 / (8.0 * std::f64::consts::PI)).abs() < 1e-12);
/// assert!(summary.std_error < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightSummary {
    /// Mean event weight.
    pub mean: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Number of events.
    pub num_points: usize,
}

impl WeightSummary {
    /// Summarises the weights of a sample.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `points` is empty.
    pub fn from_points(points: &[PhaseSpacePoint]) -> Result<Self, RamboError> {
        if points.is_empty() {
            return Err(RamboError::invalid("points", "must not be empty"));
        }

        let n = points.len();
        let n_f = n as f64;
        let mean = points.iter().map(|p| p.weight).sum::<f64>() / n_f;

        let std_error = if n > 1 {
            let variance = points
                .iter()
                .map(|p| (p.weight - mean).powi(2))
                .sum::<f64>()
                / (n_f - 1.0);
            (variance / n_f).sqrt()
        } else {
            0.0
        };

        Ok(Self {
            mean,
            std_error,
            num_points: n,
        })
    }

    /// 95% confidence interval `(lower, upper)`.
    #[inline]
    pub fn confidence_95(&self) -> (f64, f64) {
        let half_width = 1.96 * self.std_error;
        (self.mean - half_width, self.mean + half_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn weighted(weights: &[f64]) -> Vec<PhaseSpacePoint> {
        weights
            .iter()
            .map(|&w| PhaseSpacePoint::new(Vec::new(), w))
            .collect()
    }

    #[test]
    fn test_mean_and_error() {
        let summary = WeightSummary::from_points(&weighted(&[1.0, 2.0, 3.0, 4.0])).unwrap();

        assert_eq!(summary.num_points, 4);
        assert_relative_eq!(summary.mean, 2.5);
        // Sample variance 5/3, so σ/√n = √(5/12)
        assert_relative_eq!(summary.std_error, (5.0_f64 / 12.0).sqrt(), epsilon = 1e-14);

        let (lo, hi) = summary.confidence_95();
        assert_relative_eq!(hi - lo, 2.0 * 1.96 * summary.std_error, epsilon = 1e-14);
    }

    #[test]
    fn test_single_point() {
        let summary = WeightSummary::from_points(&weighted(&[7.0])).unwrap();
        assert_eq!(summary.mean, 7.0);
        assert_eq!(summary.std_error, 0.0);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            WeightSummary::from_points(&[]),
            Err(RamboError::InvalidParameter { name: "points", .. })
        ));
    }
}
