// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Swept-motion descriptors consumed by the continuous-collision backend.
//!
//! A motion maps normalized time `s ∈ [0, 1]` onto a pose. The backend never
//! sees real timestamps; callers map its normalized time of contact back onto
//! their own window.

use crate::math::Isometry;
use crate::motion::cubic::Cubic;

#[doc = "Cubic polynomials in normalized time."]
pub mod cubic;
#[doc = "Cubic spline motion restricted to a sub-window."]
pub mod spline;

/// Continuous rigid motion over normalized time.
pub trait Motion {
    /// Pose at normalized time `s`. Values outside `[0, 1]` are clamped.
    fn pose_at(&self, s: f64) -> Isometry;

    /// Path of the motion origin as `[x, y]` cubics in normalized time.
    fn translation(&self) -> [Cubic; 2];

    /// Upper bound on `|yaw rate|` per unit of normalized time over `[lo, hi]`.
    fn angular_bound(&self, lo: f64, hi: f64) -> f64;
}

/// Upper bound over `[lo, hi]` on how fast the separation between two moving
/// shapes can shrink, per unit of normalized time.
///
/// The translational part bounds the derivative of the difference of the two
/// origin paths, so shapes moving together contribute nothing. Each rotation
/// adds `|yaw rate| · radius`, where `radius` encloses that shape.
///
/// Conservative advancement divides the separation by this bound to obtain a
/// step that cannot skip a contact, so it must never underestimate.
pub fn relative_motion_bound(
    a: &dyn Motion,
    radius_a: f64,
    b: &dyn Motion,
    radius_b: f64,
    lo: f64,
    hi: f64,
) -> f64 {
    let [ax, ay] = a.translation();
    let [bx, by] = b.translation();
    let vx = ax.sub(&bx).max_abs_derivative(lo, hi);
    let vy = ay.sub(&by).max_abs_derivative(lo, hi);
    vx.hypot(vy) + a.angular_bound(lo, hi) * radius_a + b.angular_bound(lo, hi) * radius_b
}

/// A pose that never moves.
///
/// Used for static spacetime regions, which only need a motion to satisfy the
/// backend interface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StaticMotion {
    pose: Isometry,
}

impl StaticMotion {
    /// Fixes the motion at `pose`.
    pub const fn new(pose: Isometry) -> Self {
        Self { pose }
    }

    /// The fixed pose.
    pub const fn pose(&self) -> Isometry {
        self.pose
    }
}

impl Motion for StaticMotion {
    fn pose_at(&self, _s: f64) -> Isometry {
        self.pose
    }

    fn translation(&self) -> [Cubic; 2] {
        let t = self.pose.translation();
        [
            Cubic::new([t.x(), 0.0, 0.0, 0.0]),
            Cubic::new([t.y(), 0.0, 0.0, 0.0]),
        ]
    }

    fn angular_bound(&self, _lo: f64, _hi: f64) -> f64 {
        0.0
    }
}
