// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::EPSILON;

/// Planar vector used for map-frame points and directions.
///
/// * Components encode metres on the map plane and may represent either points
///   or directions depending on the calling context.
/// * Use [`crate::math::Isometry::transform_point`] for points and
///   [`crate::math::Isometry::transform_vector`] for directions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    data: [f64; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Negates both components.
    pub fn neg(&self) -> Self {
        Self::new(-self.x(), -self.y())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Perp-dot product (z component of the 3D cross product).
    pub fn cross(&self, other: &Self) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Returns `true` when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_signed_area() {
        assert_eq!(Vec2::UNIT_X.cross(&Vec2::UNIT_Y), 1.0);
        assert_eq!(Vec2::UNIT_Y.cross(&Vec2::UNIT_X), -1.0);
    }

    #[test]
    fn normalize_degenerate_is_zero() {
        assert_eq!(Vec2::new(1e-14, 0.0).normalize(), Vec2::ZERO);
        assert_eq!(Vec2::new(3.0, 4.0).normalize().to_array(), [0.6, 0.8]);
    }
}
