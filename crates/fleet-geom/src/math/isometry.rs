// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Vec2, Vec3};

/// Rigid planar transform used to place shapes on the map.
///
/// Conventions:
/// - `translation` in metres (map frame).
/// - `yaw` in radians, counter-clockwise, applied before translation.
/// - No scale: collision shapes are sized in their own constructors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Isometry {
    translation: Vec2,
    yaw: f64,
    cos: f64,
    sin: f64,
}

impl Isometry {
    /// Identity transform (no translation, no rotation).
    pub const fn identity() -> Self {
        Self {
            translation: Vec2::ZERO,
            yaw: 0.0,
            cos: 1.0,
            sin: 0.0,
        }
    }

    /// Creates a transform from a translation and a heading.
    pub fn new(translation: Vec2, yaw: f64) -> Self {
        let (sin, cos) = yaw.sin_cos();
        Self {
            translation,
            yaw,
            cos,
            sin,
        }
    }

    /// Creates a transform from an `(x, y, yaw)` state.
    pub fn from_pose(pose: Vec3) -> Self {
        Self::new(pose.translation(), pose.yaw())
    }

    /// Pure translation.
    pub fn from_translation(translation: Vec2) -> Self {
        Self::new(translation, 0.0)
    }

    /// Translation component.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Rotation component (radians).
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Rotates a direction without translating it.
    pub fn transform_vector(&self, v: &Vec2) -> Vec2 {
        Vec2::new(
            self.cos * v.x() - self.sin * v.y(),
            self.sin * v.x() + self.cos * v.y(),
        )
    }

    /// Maps a local-frame point into the parent frame.
    pub fn transform_point(&self, p: &Vec2) -> Vec2 {
        self.transform_vector(p).add(&self.translation)
    }

    /// Returns `self * other`: `other` expressed in the frame `self` maps into.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(self.transform_point(&other.translation), self.yaw + other.yaw)
    }
}

impl Default for Isometry {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_then_translate() {
        let iso = Isometry::new(Vec2::new(1.0, 2.0), FRAC_PI_2);
        let p = iso.transform_point(&Vec2::UNIT_X);
        assert!((p.x() - 1.0).abs() < 1e-12);
        assert!((p.y() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn compose_matches_sequential_application() {
        let a = Isometry::new(Vec2::new(2.0, 0.0), FRAC_PI_2);
        let b = Isometry::new(Vec2::new(1.0, 0.0), 0.3);
        let p = Vec2::new(0.5, -0.25);
        let direct = a.transform_point(&b.transform_point(&p));
        let composed = a.compose(&b).transform_point(&p);
        assert!(direct.sub(&composed).length() < 1e-12);
    }
}
