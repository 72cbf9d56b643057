//! Geometry primitives: [`Coord`].
//!
//! Coordinates live in the map's fractional space, where both axes are
//! normalised to `0.0..=1.0`. Distances measured in this space are converted
//! to meters with a network's metric scale.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Multiplier turning a 0–100 percentage into fractional map units.
pub const PERCENT: f64 = 0.01;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D point in fractional map space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in map units.
    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance. Cheaper when only ordering matters.
    #[inline]
    pub fn distance_sq(self, other: Coord) -> f64 {
        let d = self - other;
        d.x * d.x + d.y * d.y
    }

    /// Whether both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Coord {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
