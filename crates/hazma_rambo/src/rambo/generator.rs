//! RAMBO phase-space generator.
//!
//! # Algorithm
//!
//! For each event:
//!
//! 1. Draw `N` isotropic massless momenta `qᵢ` with energy density `q⁰ e^{-q⁰}`
//!    (`q⁰ = -ln(r₃ r₄)`, `cos θ = 2r₁ - 1`, `φ = 2π r₂`).
//! 2. Boost and rescale them with the conformal map built from `Q = Σ qᵢ`,
//!    `M = √Q²`: the images `pᵢ` sum to exactly `(cme, 0, 0, 0)` and are
//!    uniformly distributed in massless phase space with the constant weight
//!
//!    `w₀ = (2π)^(4-3N) (π/2)^(N-1) cme^(2N-4) / ((N-1)! (N-2)!)`.
//!
//! 3. For massive final states, solve `Σ √(mᵢ² + ξ² pᵢ⁰²) = cme` for `ξ` by
//!    Newton-Raphson, set `kᵢ = (√(mᵢ² + ξ²pᵢ⁰²), ξ p⃗ᵢ)` and multiply the
//!    weight by
//!
//!    `(Σ|k⃗ᵢ| / cme)^(2N-3) · Π(|k⃗ᵢ| / kᵢ⁰) · cme / Σ(|k⃗ᵢ|² / kᵢ⁰)`.
//!
//! Reference: R. Kleiss, W. J. Stirling, S. D. Ellis, "A new Monte Carlo
//! treatment of multiparticle phase space at high energies",
//! Comput. Phys. Commun. 40 (1986) 359.

use std::f64::consts::{FRAC_PI_2, TAU};

use hazma_core::math::solvers::NewtonRaphsonSolver;
use hazma_core::types::FourMomentum;
use rand::Rng;
use rand_distr::{Distribution, OpenClosed01, Uniform};
use tracing::{debug, trace, warn};

use super::config::RamboConfig;
use super::error::RamboError;
use super::point::PhaseSpacePoint;

/// Squared matrix element that leaves the pure phase-space weight unchanged.
#[inline]
pub fn flat_matrix_element(_momenta: &[FourMomentum]) -> f64 {
    1.0
}

/// RAMBO generator bound to a fixed list of final-state masses.
///
/// The generator is immutable: every call draws fresh events from the
/// random source it is given and returns them without touching shared state.
///
/// # Examples
///
/// ```rust
/// use hazma_rambo::rambo::Rambo;
/// use hazma_rambo::rng::PhaseSpaceRng;
///
/// // K_L -> π⁺ e⁻ ν̄ in the kaon rest frame
/// let rambo = Rambo::new(vec![139.57, 0.511, 0.0]).unwrap();
/// let mut rng = PhaseSpaceRng::from_seed(1);
///
/// let points = rambo.generate_phase_space(497.6, 1000, &mut rng).unwrap();
/// assert_eq!(points.len(), 1000);
///
/// for point in &points {
///     let total = point.total_momentum();
///     assert!((total.e - 497.6).abs() < 1e-8);
///     assert!(point.weight > 0.0);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Rambo {
    masses: Vec<f64>,
    threshold: f64,
    massless: bool,
    config: RamboConfig,
}

impl Rambo {
    /// Creates a generator with the default configuration.
    ///
    /// # Errors
    ///
    /// - `TooFewParticles` if fewer than two masses are given
    /// - `InvalidParameter` if any mass is negative or not finite
    pub fn new(masses: Vec<f64>) -> Result<Self, RamboError> {
        Self::with_config(masses, RamboConfig::default())
    }

    /// Creates a generator with an explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`Rambo::new`], plus `InvalidParameter` for an invalid configuration.
    pub fn with_config(masses: Vec<f64>, config: RamboConfig) -> Result<Self, RamboError> {
        config.validate()?;

        if masses.len() < 2 {
            return Err(RamboError::TooFewParticles(masses.len()));
        }
        if let Some((index, mass)) = masses
            .iter()
            .enumerate()
            .find(|(_, m)| !(m.is_finite() && **m >= 0.0))
        {
            return Err(RamboError::invalid(
                "masses",
                format!("mass at index {index} must be finite and non-negative, got {mass}"),
            ));
        }

        let threshold = masses.iter().sum();
        let massless = masses.iter().all(|&m| m == 0.0);

        Ok(Self {
            masses,
            threshold,
            massless,
            config,
        })
    }

    /// Final-state masses.
    #[inline]
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Number of final-state particles.
    #[inline]
    pub fn num_particles(&self) -> usize {
        self.masses.len()
    }

    /// Sum of the final-state masses.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether every final-state particle is massless.
    #[inline]
    pub fn is_massless(&self) -> bool {
        self.massless
    }

    /// Numerical configuration.
    #[inline]
    pub fn config(&self) -> &RamboConfig {
        &self.config
    }

    /// Generates a single event.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `cme` is not a positive finite number
    /// - `BelowThreshold` if `cme` does not exceed the sum of the masses
    /// - `Convergence` if the massive rescaling fails
    pub fn generate_point<R: Rng + ?Sized>(
        &self,
        cme: f64,
        rng: &mut R,
    ) -> Result<PhaseSpacePoint, RamboError> {
        self.check_energy(cme)?;
        EventKernel::new(self, cme).sample(rng, &flat_matrix_element)
    }

    /// Generates `num_points` independent events.
    ///
    /// Either every requested event is returned or an error is; partial
    /// samples are never handed back.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `num_points` is 0 or `cme` is invalid
    /// - `BelowThreshold` if `cme` does not exceed the sum of the masses
    /// - `Convergence` if the massive rescaling fails for any event
    pub fn generate_phase_space<R: Rng + ?Sized>(
        &self,
        cme: f64,
        num_points: usize,
        rng: &mut R,
    ) -> Result<Vec<PhaseSpacePoint>, RamboError> {
        self.generate_phase_space_with(cme, num_points, rng, flat_matrix_element)
    }

    /// Generates `num_points` events whose weights are multiplied by
    /// `mat_elem_sqrd` evaluated on each event's momenta.
    ///
    /// # Errors
    ///
    /// As [`Rambo::generate_phase_space`], plus `InvalidMatrixElement` if the
    /// matrix element returns a negative or non-finite value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hazma_core::types::FourMomentum;
    /// use hazma_rambo::rambo::Rambo;
    /// use hazma_rambo::rng::PhaseSpaceRng;
    ///
    /// let rambo = Rambo::new(vec![0.0, 0.0, 0.0]).unwrap();
    /// let mut rng = PhaseSpaceRng::from_seed(3);
    ///
    /// // Weight events by the invariant mass of the first pair
    /// let points = rambo
    ///     .generate_phase_space_with(100.0, 10, &mut rng, |k: &[FourMomentum]| {
    ///         (k[0] + k[1]).mass().powi(2)
    ///     })
    ///     .unwrap();
    /// assert!(points.iter().all(|p| p.weight >= 0.0));
    /// ```
    pub fn generate_phase_space_with<R, M>(
        &self,
        cme: f64,
        num_points: usize,
        rng: &mut R,
        mat_elem_sqrd: M,
    ) -> Result<Vec<PhaseSpacePoint>, RamboError>
    where
        R: Rng + ?Sized,
        M: Fn(&[FourMomentum]) -> f64,
    {
        check_num_points(num_points)?;
        self.check_energy(cme)?;

        debug!(
            num_particles = self.num_particles(),
            cme,
            num_points,
            massless = self.massless,
            "generating phase space"
        );

        let kernel = EventKernel::new(self, cme);
        (0..num_points)
            .map(|_| kernel.sample(&mut *rng, &mat_elem_sqrd))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| warn!(%err, cme, "phase-space generation failed"))
    }

    /// Rejects energies that are malformed or at/below threshold.
    pub(crate) fn check_energy(&self, cme: f64) -> Result<(), RamboError> {
        if !(cme.is_finite() && cme > 0.0) {
            return Err(RamboError::invalid(
                "cme",
                format!("must be positive and finite, got {cme}"),
            ));
        }
        if cme <= self.threshold {
            warn!(cme, threshold = self.threshold, "energy below threshold");
            return Err(RamboError::BelowThreshold {
                cme,
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

/// Rejects empty sample requests.
pub(crate) fn check_num_points(num_points: usize) -> Result<(), RamboError> {
    if num_points == 0 {
        return Err(RamboError::invalid("num_points", "must be at least 1"));
    }
    Ok(())
}

/// Per-call event sampler: everything that depends only on the masses and
/// the energy is computed once here and shared (read-only) by every event.
pub(crate) struct EventKernel<'a> {
    masses: &'a [f64],
    massless: bool,
    cme: f64,
    /// Constant massless weight `w₀`.
    base_weight: f64,
    /// `ξ₀ = √(1 - (Σm / cme)²)`.
    initial_scale: f64,
    solver: NewtonRaphsonSolver<f64>,
    cos_theta: Uniform<f64>,
    azimuth: Uniform<f64>,
}

impl<'a> EventKernel<'a> {
    /// Callers must have run `Rambo::check_energy` first.
    pub(crate) fn new(rambo: &'a Rambo, cme: f64) -> Self {
        let ratio = rambo.threshold / cme;
        Self {
            masses: &rambo.masses,
            massless: rambo.massless,
            cme,
            base_weight: massless_weight(rambo.masses.len(), cme),
            initial_scale: (1.0 - ratio * ratio).sqrt(),
            solver: NewtonRaphsonSolver::new(rambo.config.solver_config()),
            cos_theta: Uniform::new(-1.0, 1.0),
            azimuth: Uniform::new(0.0, TAU),
        }
    }

    /// Draws one event and applies the matrix element to its weight.
    pub(crate) fn sample<R, M>(&self, rng: &mut R, mat_elem_sqrd: &M) -> Result<PhaseSpacePoint, RamboError>
    where
        R: Rng + ?Sized,
        M: Fn(&[FourMomentum]) -> f64,
    {
        let massless = self.massless_momenta(rng);

        let (momenta, weight) = if self.massless {
            (massless, self.base_weight)
        } else {
            let (momenta, correction) = self.rescale(&massless)?;
            (momenta, self.base_weight * correction)
        };

        let me = mat_elem_sqrd(&momenta);
        if !(me.is_finite() && me >= 0.0) {
            return Err(RamboError::InvalidMatrixElement { value: me });
        }

        Ok(PhaseSpacePoint::new(momenta, weight * me))
    }

    /// Steps 1 and 2: isotropic seeds mapped onto `(cme, 0⃗)`.
    fn massless_momenta<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<FourMomentum> {
        let n = self.masses.len();
        let mut seeds = Vec::with_capacity(n);
        let mut total = FourMomentum::zero();

        for _ in 0..n {
            let cos_theta = self.cos_theta.sample(rng);
            let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
            let (sin_phi, cos_phi) = self.azimuth.sample(rng).sin_cos();

            let r3: f64 = OpenClosed01.sample(rng);
            let r4: f64 = OpenClosed01.sample(rng);
            let energy = -(r3 * r4).ln();

            let q = FourMomentum::new(
                energy,
                energy * sin_theta * cos_phi,
                energy * sin_theta * sin_phi,
                energy * cos_theta,
            );
            total += q;
            seeds.push(q);
        }

        let mass = total.mass();
        let (bx, by, bz) = (-total.px / mass, -total.py / mass, -total.pz / mass);
        let gamma = total.e / mass;
        let a = 1.0 / (1.0 + gamma);
        let x = self.cme / mass;

        seeds
            .iter()
            .map(|q| {
                let bq = bx * q.px + by * q.py + bz * q.pz;
                let shift = q.e + a * bq;
                FourMomentum::new(
                    x * (gamma * q.e + bq),
                    x * (q.px + bx * shift),
                    x * (q.py + by * shift),
                    x * (q.pz + bz * shift),
                )
            })
            .collect()
    }

    /// Step 3: common three-momentum scale ξ and the massive weight factor.
    fn rescale(&self, massless: &[FourMomentum]) -> Result<(Vec<FourMomentum>, f64), RamboError> {
        let cme = self.cme;
        let masses = self.masses;

        let residual = |xi: f64| {
            masses
                .iter()
                .zip(massless)
                .map(|(m, p)| (m * m + xi * xi * p.e * p.e).sqrt())
                .sum::<f64>()
                / cme
                - 1.0
        };
        let slope = |xi: f64| {
            masses
                .iter()
                .zip(massless)
                .map(|(m, p)| xi * p.e * p.e / (m * m + xi * xi * p.e * p.e).sqrt())
                .sum::<f64>()
                / cme
        };

        let xi = self
            .solver
            .find_root(residual, slope, self.initial_scale)?;
        trace!(xi, "momentum scale");

        let mut momenta = Vec::with_capacity(massless.len());
        let mut sum_k = 0.0;
        let mut product = 1.0;
        let mut sum_k2_over_e = 0.0;

        for (p, &m) in massless.iter().zip(masses) {
            let k = xi * p.e;
            let e = (m * m + k * k).sqrt();
            sum_k += k;
            product *= k / e;
            sum_k2_over_e += k * k / e;
            momenta.push(FourMomentum::new(e, xi * p.px, xi * p.py, xi * p.pz));
        }

        let exponent = 2 * massless.len() as i32 - 3;
        let correction = (sum_k / cme).powi(exponent) * product * cme / sum_k2_over_e;

        Ok((momenta, correction))
    }
}

/// Constant weight of an `n`-body massless event at energy `cme`.
///
/// Evaluated in log space so that large multiplicities do not overflow.
pub(crate) fn massless_weight(n: usize, cme: f64) -> f64 {
    let n_f = n as f64;
    // ln((n-1)!) + ln((n-2)!)
    let log_factorials: f64 = (2..n).map(|k| (k as f64).ln()).sum::<f64>()
        + (2..n.saturating_sub(1)).map(|k| (k as f64).ln()).sum::<f64>();

    let log_weight = (n_f - 1.0) * FRAC_PI_2.ln() + (2.0 * n_f - 4.0) * cme.ln()
        - log_factorials
        - (3.0 * n_f - 4.0) * TAU.ln();

    log_weight.exp()
}
