// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fleet_geom::math::EPSILON;
use fleet_geom::{Aabb, Cubic, SplineMotion, Vec3};

use crate::conflict::InvalidTrajectoryError;
use crate::profile::Profile;
use crate::time::Time;
use crate::trajectory::Segment;

/// Cubic Hermite model of one segment, one polynomial per `(x, y, yaw)` axis.
///
/// The polynomials run over normalized time `u ∈ [0, 1]` across the segment.
/// Boundary velocities are scaled by the segment duration so that the curve's
/// derivative matches the waypoints in real time.
#[derive(Debug, Clone, Copy)]
pub struct Spline<'a> {
    segment: Segment<'a>,
    axes: [Cubic; 3],
}

impl<'a> Spline<'a> {
    /// Fits the segment's boundary states.
    pub fn new(segment: Segment<'a>) -> Self {
        let (w0, w1) = (segment.start(), segment.finish());
        let dt = segment.duration().as_secs_f64();
        let (p0, p1) = (w0.position(), w1.position());
        let (v0, v1) = (w0.velocity(), w1.velocity());
        let axis = |k: usize| {
            Cubic::hermite(
                p0.component(k),
                p1.component(k),
                v0.component(k) * dt,
                v1.component(k) * dt,
            )
        };
        Self {
            segment,
            axes: [axis(0), axis(1), axis(2)],
        }
    }

    /// Start of the modelled segment.
    pub fn start_time(&self) -> Time {
        self.segment.start_time()
    }

    /// End of the modelled segment.
    pub fn finish_time(&self) -> Time {
        self.segment.finish_time()
    }

    /// Profile governing the segment.
    pub fn profile(&self) -> &'a Profile {
        self.segment.profile()
    }

    /// Ordinal of the segment in its trajectory.
    pub fn segment_index(&self) -> usize {
        self.segment.index()
    }

    /// `[a, b, c, d]` per axis, for `a + b·u + c·u² + d·u³`.
    pub fn coefficients(&self) -> [[f64; 4]; 3] {
        self.axes.map(|c| c.coeffs())
    }

    fn parameter(&self, time: Time) -> f64 {
        (time - self.start_time()).as_secs_f64() / self.segment.duration().as_secs_f64()
    }

    /// `(x, y, yaw)` at `time`. Times outside the segment extrapolate the cubic.
    pub fn position_at(&self, time: Time) -> Vec3 {
        let u = self.parameter(time);
        Vec3::new(
            self.axes[0].evaluate(u),
            self.axes[1].evaluate(u),
            self.axes[2].evaluate(u),
        )
    }

    /// `(x, y, yaw)` velocity at `time`, per second.
    pub fn velocity_at(&self, time: Time) -> Vec3 {
        let u = self.parameter(time);
        let dt = self.segment.duration().as_secs_f64();
        Vec3::new(
            self.axes[0].derivative(u),
            self.axes[1].derivative(u),
            self.axes[2].derivative(u),
        )
        .scale(1.0 / dt)
    }

    /// `[min, max]` of `axis` (0 = x, 1 = y, 2 = yaw) over the whole segment.
    ///
    /// Candidates are both endpoints plus every root of the derivative that
    /// falls inside `[0, 1]`. Panics if `axis > 2`.
    pub fn local_extrema(&self, axis: usize) -> [f64; 2] {
        let cubic = self.axes[axis];
        let [_, b, c, d] = cubic.coeffs();
        let mut lo = cubic.evaluate(0.0).min(cubic.evaluate(1.0));
        let mut hi = cubic.evaluate(0.0).max(cubic.evaluate(1.0));
        let mut consider = |u: f64| {
            if (0.0..=1.0).contains(&u) {
                let x = cubic.evaluate(u);
                lo = lo.min(x);
                hi = hi.max(x);
            }
        };

        // Derivative: b + 2c·u + 3d·u².
        if d.abs() < EPSILON {
            if c.abs() > EPSILON {
                consider(-b / (2.0 * c));
            }
        } else {
            let disc = 4.0 * c * c - 12.0 * b * d;
            debug_assert!(disc.is_finite(), "non-finite discriminant {disc}");
            if disc.abs() < EPSILON {
                consider(-2.0 * c / (6.0 * d));
            } else if disc > 0.0 {
                let root = disc.sqrt();
                consider((-2.0 * c + root) / (6.0 * d));
                consider((-2.0 * c - root) / (6.0 * d));
            }
            // disc < 0: the derivative never vanishes, endpoints bound the curve.
        }
        [lo, hi]
    }

    /// Planar box around everything the profile's shape sweeps over the segment.
    ///
    /// # Errors
    /// [`InvalidTrajectoryError::MissingShape`] if the profile has no shape.
    pub fn bounding_box(&self) -> Result<Aabb, InvalidTrajectoryError> {
        let shape = self
            .profile()
            .shape()
            .ok_or(InvalidTrajectoryError::MissingShape {
                time: self.start_time(),
            })?;
        let bounds = Aabb::from_intervals(self.local_extrema(0), self.local_extrema(1));
        Ok(bounds.inflate(shape.characteristic_length()))
    }

    /// Swept-motion descriptor covering `[t0, t1]` within this segment.
    pub fn to_motion(&self, t0: Time, t1: Time) -> SplineMotion {
        SplineMotion::new(self.axes, self.parameter(t0), self.parameter(t1))
    }
}
