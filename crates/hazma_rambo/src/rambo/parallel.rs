//! Seeded, thread-count-independent parallel generation.
//!
//! Event `i` of a run with base seed `s` is always drawn from
//! [`PhaseSpaceRng::for_stream`]`(s, i)`, so the returned sample depends only
//! on `(masses, cme, num_points, seed)` and not on how rayon schedules the
//! work. Small requests run on the calling thread.
//!
//! ```text
//!   event 0 ── stream(s, 0) ─┐
//!   event 1 ── stream(s, 1) ─┤
//!     ...                    ├──► ordered Vec<PhaseSpacePoint>
//!   event n ── stream(s, n) ─┘
//! ```

use hazma_core::types::FourMomentum;
use rayon::prelude::*;
use tracing::{debug, warn};

use super::error::RamboError;
use super::generator::{check_num_points, flat_matrix_element, EventKernel, Rambo};
use super::point::PhaseSpacePoint;
use crate::rng::PhaseSpaceRng;

impl Rambo {
    /// Generates `num_points` events across the rayon thread pool.
    ///
    /// # Errors
    ///
    /// As [`Rambo::generate_phase_space`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hazma_rambo::rambo::Rambo;
    ///
    /// let rambo = Rambo::new(vec![0.0, 0.0, 0.0, 0.0]).unwrap();
    ///
    /// let a = rambo.generate_phase_space_par(50.0, 2_000, 17).unwrap();
    /// let b = rambo.generate_phase_space_par(50.0, 2_000, 17).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn generate_phase_space_par(
        &self,
        cme: f64,
        num_points: usize,
        seed: u64,
    ) -> Result<Vec<PhaseSpacePoint>, RamboError> {
        self.generate_phase_space_par_with(cme, num_points, seed, flat_matrix_element)
    }

    /// Parallel counterpart of [`Rambo::generate_phase_space_with`].
    ///
    /// # Errors
    ///
    /// As [`Rambo::generate_phase_space_with`].
    pub fn generate_phase_space_par_with<M>(
        &self,
        cme: f64,
        num_points: usize,
        seed: u64,
        mat_elem_sqrd: M,
    ) -> Result<Vec<PhaseSpacePoint>, RamboError>
    where
        M: Fn(&[FourMomentum]) -> f64 + Sync,
    {
        check_num_points(num_points)?;
        self.check_energy(cme)?;

        let parallel = self.config().should_parallelise(num_points);
        debug!(
            num_particles = self.num_particles(),
            cme,
            num_points,
            seed,
            parallel,
            threads = rayon::current_num_threads(),
            "generating phase space"
        );

        let kernel = EventKernel::new(self, cme);
        let event = |index: usize| {
            let mut rng = PhaseSpaceRng::for_stream(seed, index as u64);
            kernel.sample(&mut rng, &mat_elem_sqrd)
        };

        let result = if parallel {
            (0..num_points)
                .into_par_iter()
                .map(event)
                .collect::<Result<Vec<_>, _>>()
        } else {
            (0..num_points).map(event).collect::<Result<Vec<_>, _>>()
        };

        result.inspect_err(|err| warn!(%err, cme, seed, "parallel phase-space generation failed"))
    }
}
