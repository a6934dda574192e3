//! Phase-space events.

use hazma_core::types::FourMomentum;

/// One generated event: final-state momenta in the centre-of-mass frame and
/// the Monte-Carlo weight.
///
/// # Examples
///
/// ```rust
/// use hazma_core::types::FourMomentum;
/// use hazma_rambo::rambo::PhaseSpacePoint;
///
/// let point = PhaseSpacePoint::new(
///     vec![
///         FourMomentum::new(50.0, 0.0, 0.0, 50.0),
///         FourMomentum::new(50.0, 0.0, 0.0, -50.0),
///     ],
///     0.25,
/// );
///
/// assert_eq!(point.total_momentum(), FourMomentum::new(100.0, 0.0, 0.0, 0.0));
/// assert_eq!(point.energy(1), Some(50.0));
/// assert_eq!(point.to_flat().len(), 9);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseSpacePoint {
    /// Four-momenta, in the order of the generator's mass vector.
    pub momenta: Vec<FourMomentum>,
    /// Event weight (non-negative).
    pub weight: f64,
}

impl PhaseSpacePoint {
    /// Creates an event from its momenta and weight.
    #[inline]
    pub fn new(momenta: Vec<FourMomentum>, weight: f64) -> Self {
        Self { momenta, weight }
    }

    /// Number of final-state particles.
    #[inline]
    pub fn num_particles(&self) -> usize {
        self.momenta.len()
    }

    /// Sum of all final-state momenta.
    #[inline]
    pub fn total_momentum(&self) -> FourMomentum {
        self.momenta.iter().sum()
    }

    /// Energy of particle `index`, if it exists.
    #[inline]
    pub fn energy(&self, index: usize) -> Option<f64> {
        self.momenta.get(index).map(|p| p.e)
    }

    /// Flattens to `[E1, px1, py1, pz1, …, EN, pxN, pyN, pzN, weight]`.
    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(4 * self.momenta.len() + 1);
        for p in &self.momenta {
            flat.extend_from_slice(&p.to_array());
        }
        flat.push(self.weight);
        flat
    }
}
