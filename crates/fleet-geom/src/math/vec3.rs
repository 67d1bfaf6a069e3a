// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec2;

/// Planar robot state `(x, y, yaw)`.
///
/// Waypoints store both positions and velocities in this form: metres for the
/// first two components, radians (or radians per second) for the third.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// The zero state.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a state from components.
    pub const fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { data: [x, y, yaw] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Component by axis index (`0 = x`, `1 = y`, `2 = yaw`).
    ///
    /// # Panics
    /// Panics if `axis > 2`.
    pub fn component(&self, axis: usize) -> f64 {
        self.data[axis]
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// The planar `(x, y)` part.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.data[0], self.data[1])
    }

    /// Heading component.
    pub fn yaw(&self) -> f64 {
        self.data[2]
    }

    /// Scales every component by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(
            self.data[0] * scalar,
            self.data[1] * scalar,
            self.data[2] * scalar,
        )
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}
