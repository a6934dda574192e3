//! Weighted energy histograms of generated events.
//!
//! Bins span the observed range of the selected particle's energy in the
//! sample (not the kinematic endpoints), with equal widths. Bin contents are
//! normalised to a probability density, so `Σ densityᵢ · widthᵢ = 1`.

use rand::Rng;
use tracing::debug;

use super::error::RamboError;
use super::generator::{check_num_points, flat_matrix_element, Rambo};
use super::point::PhaseSpacePoint;
use hazma_core::types::FourMomentum;

/// Relative half-width used to open up a degenerate (single-valued) range.
const DEGENERATE_PADDING: f64 = 1e-9;

/// Normalised energy distribution of one final-state particle.
///
/// # Examples
///
/// ```rust
/// use hazma_rambo::rambo::Rambo;
/// use hazma_rambo::rng::PhaseSpaceRng;
///
/// // μ⁻ → e⁻ ν̄ ν in the muon rest frame
/// let rambo = Rambo::new(vec![0.511, 0.0, 0.0]).unwrap();
/// let mut rng = PhaseSpaceRng::from_seed(10);
///
/// let hist = rambo
///     .generate_energy_histogram(105.66, 10_000, 0, 25, &mut rng)
///     .unwrap();
///
/// assert_eq!(hist.edges.len(), 26);
/// assert!((hist.integral() - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyHistogram {
    /// Index of the histogrammed particle.
    pub particle_index: usize,
    /// Bin edges, `num_bins + 1` increasing values.
    pub edges: Vec<f64>,
    /// Weighted probability density per bin.
    pub densities: Vec<f64>,
}

impl EnergyHistogram {
    /// Bins the energy of particle `particle_index` over an existing sample.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `num_bins` is 0 or `points` is empty
    /// - `IndexOutOfRange` if some event has no particle `particle_index`
    /// - `ZeroTotalWeight` if the weights sum to zero
    pub fn from_points(
        points: &[PhaseSpacePoint],
        particle_index: usize,
        num_bins: usize,
    ) -> Result<Self, RamboError> {
        if num_bins == 0 {
            return Err(RamboError::invalid("num_bins", "must be at least 1"));
        }
        if points.is_empty() {
            return Err(RamboError::invalid("points", "must not be empty"));
        }

        let mut samples = Vec::with_capacity(points.len());
        for point in points {
            let energy = point
                .energy(particle_index)
                .ok_or(RamboError::IndexOutOfRange {
                    index: particle_index,
                    count: point.num_particles(),
                })?;
            samples.push((energy, point.weight));
        }

        let total_weight: f64 = samples.iter().map(|&(_, w)| w).sum();
        if !(total_weight > 0.0) {
            return Err(RamboError::ZeroTotalWeight);
        }

        let (mut lo, mut hi) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(e, _)| {
                (lo.min(e), hi.max(e))
            });
        if hi <= lo {
            let pad = lo.abs().max(1.0) * DEGENERATE_PADDING;
            lo -= pad;
            hi += pad;
        }

        let width = (hi - lo) / num_bins as f64;
        let mut edges: Vec<f64> = (0..num_bins).map(|i| lo + i as f64 * width).collect();
        edges.push(hi);

        let mut weights = vec![0.0; num_bins];
        for &(energy, weight) in &samples {
            let bin = (((energy - lo) / width) as usize).min(num_bins - 1);
            weights[bin] += weight;
        }

        let densities = weights
            .iter()
            .zip(edges.windows(2))
            .map(|(w, edge)| w / (total_weight * (edge[1] - edge[0])))
            .collect();

        Ok(Self {
            particle_index,
            edges,
            densities,
        })
    }

    /// Number of bins.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.densities.len()
    }

    /// Width of each bin.
    pub fn bin_widths(&self) -> Vec<f64> {
        self.edges.windows(2).map(|e| e[1] - e[0]).collect()
    }

    /// Midpoint of each bin.
    pub fn bin_centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|e| 0.5 * (e[0] + e[1])).collect()
    }

    /// `Σ densityᵢ · widthᵢ`; one up to round-off.
    pub fn integral(&self) -> f64 {
        self.densities
            .iter()
            .zip(self.edges.windows(2))
            .map(|(d, e)| d * (e[1] - e[0]))
            .sum()
    }
}

impl Rambo {
    /// Generates `num_points` events and histograms the energy of particle
    /// `particle_index` into `num_bins` equal-width bins.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if `particle_index >= num_particles()`
    /// - `InvalidParameter` if `num_bins` or `num_points` is 0, or `cme` is invalid
    /// - `BelowThreshold` and `Convergence` as for generation
    pub fn generate_energy_histogram<R: Rng + ?Sized>(
        &self,
        cme: f64,
        num_points: usize,
        particle_index: usize,
        num_bins: usize,
        rng: &mut R,
    ) -> Result<EnergyHistogram, RamboError> {
        if particle_index >= self.num_particles() {
            return Err(RamboError::IndexOutOfRange {
                index: particle_index,
                count: self.num_particles(),
            });
        }
        check_num_bins(num_bins)?;

        let points = self.generate_phase_space(cme, num_points, rng)?;
        EnergyHistogram::from_points(&points, particle_index, num_bins)
    }

    /// Generates one sample and histograms the energy of every particle.
    ///
    /// # Errors
    ///
    /// As [`Rambo::generate_energy_histogram`], except for the index check.
    pub fn generate_energy_histograms<R: Rng + ?Sized>(
        &self,
        cme: f64,
        num_points: usize,
        num_bins: usize,
        rng: &mut R,
    ) -> Result<Vec<EnergyHistogram>, RamboError> {
        self.generate_energy_histograms_with(cme, num_points, num_bins, rng, flat_matrix_element)
    }

    /// As [`Rambo::generate_energy_histograms`], with events weighted by a
    /// squared matrix element.
    ///
    /// # Errors
    ///
    /// As [`Rambo::generate_energy_histograms`], plus `InvalidMatrixElement`
    /// and `ZeroTotalWeight` when the matrix element vanishes everywhere.
    pub fn generate_energy_histograms_with<R, M>(
        &self,
        cme: f64,
        num_points: usize,
        num_bins: usize,
        rng: &mut R,
        mat_elem_sqrd: M,
    ) -> Result<Vec<EnergyHistogram>, RamboError>
    where
        R: Rng + ?Sized,
        M: Fn(&[FourMomentum]) -> f64,
    {
        check_num_bins(num_bins)?;
        check_num_points(num_points)?;

        let points = self.generate_phase_space_with(cme, num_points, rng, mat_elem_sqrd)?;
        debug!(num_bins, num_points, "histogramming particle energies");

        (0..self.num_particles())
            .map(|index| EnergyHistogram::from_points(&points, index, num_bins))
            .collect()
    }
}

fn check_num_bins(num_bins: usize) -> Result<(), RamboError> {
    if num_bins == 0 {
        return Err(RamboError::invalid("num_bins", "must be at least 1"));
    }
    Ok(())
}
