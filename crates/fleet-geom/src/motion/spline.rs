// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Isometry, Vec3};
use crate::motion::{cubic::Cubic, Motion};

/// Cubic `(x, y, yaw)` motion restricted to a sub-window of its segment.
///
/// The axes are parameterized on the full segment, `u ∈ [0, 1]`. The motion
/// exposes only `[u0, u1]`, re-parameterized so that `s = 0` maps to `u0` and
/// `s = 1` maps to `u1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplineMotion {
    axes: [Cubic; 3],
    u0: f64,
    u1: f64,
}

impl SplineMotion {
    /// Creates a motion over `[u0, u1]` of the given per-axis cubics.
    ///
    /// The window is clamped into `[0, 1]`; a reversed window collapses to `u0`.
    pub fn new(axes: [Cubic; 3], u0: f64, u1: f64) -> Self {
        let u0 = u0.clamp(0.0, 1.0);
        let u1 = u1.clamp(u0, 1.0);
        Self { axes, u0, u1 }
    }

    /// The per-axis cubics on the full segment.
    pub fn axes(&self) -> &[Cubic; 3] {
        &self.axes
    }

    /// The `[u0, u1]` window of the segment this motion covers.
    pub fn window(&self) -> [f64; 2] {
        [self.u0, self.u1]
    }

    fn parameter(&self, s: f64) -> f64 {
        self.u0 + s.clamp(0.0, 1.0) * (self.u1 - self.u0)
    }

    /// Axis cubic re-parameterized onto the window.
    fn windowed(&self, axis: usize) -> Cubic {
        self.axes[axis].reparameterize(self.u0, self.u1 - self.u0)
    }

    /// `(x, y, yaw)` at normalized window time `s`.
    pub fn state_at(&self, s: f64) -> Vec3 {
        let u = self.parameter(s);
        Vec3::new(
            self.axes[0].evaluate(u),
            self.axes[1].evaluate(u),
            self.axes[2].evaluate(u),
        )
    }
}

impl Motion for SplineMotion {
    fn pose_at(&self, s: f64) -> Isometry {
        Isometry::from_pose(self.state_at(s))
    }

    fn translation(&self) -> [Cubic; 2] {
        [self.windowed(0), self.windowed(1)]
    }

    fn angular_bound(&self, lo: f64, hi: f64) -> f64 {
        self.windowed(2).max_abs_derivative(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{relative_motion_bound, StaticMotion};

    fn straight_line() -> [Cubic; 3] {
        [
            Cubic::hermite(0.0, 10.0, 10.0, 10.0),
            Cubic::hermite(0.0, 0.0, 0.0, 0.0),
            Cubic::hermite(0.0, 0.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn window_reparameterizes_time() {
        let m = SplineMotion::new(straight_line(), 0.2, 0.6);
        assert!((m.pose_at(0.0).translation().x() - 2.0).abs() < 1e-12);
        assert!((m.pose_at(1.0).translation().x() - 6.0).abs() < 1e-12);
        assert!((m.pose_at(0.5).translation().x() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn bound_scales_with_window() {
        let fixed = StaticMotion::new(Isometry::identity());
        let full = SplineMotion::new(straight_line(), 0.0, 1.0);
        let half = SplineMotion::new(straight_line(), 0.5, 1.0);
        assert!((relative_motion_bound(&full, 0.0, &fixed, 0.0, 0.0, 1.0) - 10.0).abs() < 1e-12);
        assert!((relative_motion_bound(&half, 0.0, &fixed, 0.0, 0.0, 1.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn shared_motion_cancels() {
        let lane = SplineMotion::new(straight_line(), 0.0, 1.0);
        let mut shifted = straight_line();
        shifted[1] = Cubic::hermite(1.02, 1.02, 0.0, 0.0);
        let beside = SplineMotion::new(shifted, 0.0, 1.0);
        assert!(relative_motion_bound(&lane, 0.7, &beside, 0.7, 0.0, 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_contributes_through_radius() {
        let spin = [
            Cubic::hermite(0.0, 0.0, 0.0, 0.0),
            Cubic::hermite(0.0, 0.0, 0.0, 0.0),
            Cubic::hermite(0.0, 1.0, 1.0, 1.0),
        ];
        let m = SplineMotion::new(spin, 0.0, 1.0);
        let fixed = StaticMotion::new(Isometry::identity());
        assert_eq!(relative_motion_bound(&m, 0.0, &fixed, 0.0, 0.0, 1.0), 0.0);
        assert!((relative_motion_bound(&m, 2.0, &fixed, 0.0, 0.0, 1.0) - 2.0).abs() < 1e-12);
    }
}
