//! Relativistic four-momentum.
//!
//! [`FourMomentum`] is a plain `Copy` value holding `(E, px, py, pz)` in
//! natural units. Products use the mostly-minus metric.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Four-momentum `(E, px, py, pz)`.
///
/// # Examples
///
/// ```rust
/// use hazma_core::types::FourMomentum;
///
/// let p = FourMomentum::new(5.0, 0.0, 3.0, 0.0);
/// assert_eq!(p.mass_squared(), 16.0);
/// assert_eq!(p.mass(), 4.0);
/// assert_eq!(p.three_momentum_norm(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourMomentum {
    /// Energy component.
    pub e: f64,
    /// x component of the three-momentum.
    pub px: f64,
    /// y component of the three-momentum.
    pub py: f64,
    /// z component of the three-momentum.
    pub pz: f64,
}

impl FourMomentum {
    /// Creates a four-momentum from its components.
    #[inline]
    pub const fn new(e: f64, px: f64, py: f64, pz: f64) -> Self {
        Self { e, px, py, pz }
    }

    /// The zero four-vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Returns the components as `[E, px, py, pz]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.e, self.px, self.py, self.pz]
    }

    /// Minkowski product `E₁E₂ - p⃗₁·p⃗₂`.
    #[inline]
    pub fn dot(&self, other: &FourMomentum) -> f64 {
        self.e * other.e - self.spatial_dot(other)
    }

    /// Euclidean product of the spatial parts.
    #[inline]
    pub fn spatial_dot(&self, other: &FourMomentum) -> f64 {
        self.px * other.px + self.py * other.py + self.pz * other.pz
    }

    /// Invariant mass squared, `E² - |p⃗|²`.
    #[inline]
    pub fn mass_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Invariant mass.
    ///
    /// Slightly negative invariants from round-off are clamped to zero.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass_squared().max(0.0).sqrt()
    }

    /// `|p⃗|²`.
    #[inline]
    pub fn three_momentum_squared(&self) -> f64 {
        self.spatial_dot(self)
    }

    /// `|p⃗|`.
    #[inline]
    pub fn three_momentum_norm(&self) -> f64 {
        self.three_momentum_squared().sqrt()
    }

    /// Checks `E² - |p⃗|² = m²` to a tolerance relative to `max(E², 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hazma_core::types::FourMomentum;
    ///
    /// let muon = FourMomentum::new(106.0, 3.0, 4.0, 0.0);
    /// let mass = (106.0_f64 * 106.0 - 25.0).sqrt();
    /// assert!(muon.is_on_shell(mass, 1e-12));
    /// assert!(!muon.is_on_shell(0.0, 1e-12));
    /// ```
    pub fn is_on_shell(&self, mass: f64, rel_tol: f64) -> bool {
        let scale = (self.e * self.e).max(1.0);
        (self.mass_squared() - mass * mass).abs() <= rel_tol * scale
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.e.is_finite() && self.px.is_finite() && self.py.is_finite() && self.pz.is_finite()
    }
}

impl From<[f64; 4]> for FourMomentum {
    #[inline]
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl fmt::Display for FourMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.e, self.px, self.py, self.pz)
    }
}

impl Add for FourMomentum {
    type Output = FourMomentum;

    #[inline]
    fn add(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum::new(
            self.e + rhs.e,
            self.px + rhs.px,
            self.py + rhs.py,
            self.pz + rhs.pz,
        )
    }
}

impl AddAssign for FourMomentum {
    #[inline]
    fn add_assign(&mut self, rhs: FourMomentum) {
        self.e += rhs.e;
        self.px += rhs.px;
        self.py += rhs.py;
        self.pz += rhs.pz;
    }
}

impl Sub for FourMomentum {
    type Output = FourMomentum;

    #[inline]
    fn sub(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum::new(
            self.e - rhs.e,
            self.px - rhs.px,
            self.py - rhs.py,
            self.pz - rhs.pz,
        )
    }
}

impl Neg for FourMomentum {
    type Output = FourMomentum;

    #[inline]
    fn neg(self) -> FourMomentum {
        FourMomentum::new(-self.e, -self.px, -self.py, -self.pz)
    }
}

impl Mul<f64> for FourMomentum {
    type Output = FourMomentum;

    #[inline]
    fn mul(self, rhs: f64) -> FourMomentum {
        FourMomentum::new(self.e * rhs, self.px * rhs, self.py * rhs, self.pz * rhs)
    }
}

impl Sum for FourMomentum {
    fn sum<I: Iterator<Item = FourMomentum>>(iter: I) -> FourMomentum {
        iter.fold(FourMomentum::zero(), |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a FourMomentum> for FourMomentum {
    fn sum<I: Iterator<Item = &'a FourMomentum>>(iter: I) -> FourMomentum {
        iter.fold(FourMomentum::zero(), |acc, p| acc + *p)
    }
}
