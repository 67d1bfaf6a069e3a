// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use fleet_geom::{ConvexShape, Vec3};
use fleet_traffic::{Profile, Time, Trajectory};

pub fn secs(s: f64) -> Time {
    Time::from_secs_f64(s)
}

pub fn disc(radius: f64) -> Profile {
    Profile::new(ConvexShape::Circle { radius })
}

pub fn square(side: f64) -> Profile {
    Profile::new(ConvexShape::Box {
        width: side,
        height: side,
    })
}

/// Constant-velocity trajectory from `from` at `t0` to `to` at `t1`.
pub fn straight(
    map: &str,
    profile: &Profile,
    from: [f64; 2],
    to: [f64; 2],
    t0: f64,
    t1: f64,
) -> Trajectory {
    let dt = t1 - t0;
    let velocity = Vec3::new((to[0] - from[0]) / dt, (to[1] - from[1]) / dt, 0.0);
    let mut trajectory = Trajectory::new(map);
    trajectory
        .insert(secs(t0), profile.clone(), Vec3::new(from[0], from[1], 0.0), velocity)
        .expect("unique time");
    trajectory
        .insert(secs(t1), profile.clone(), Vec3::new(to[0], to[1], 0.0), velocity)
        .expect("unique time");
    trajectory
}

/// Smooth trajectory through `points` at one-second intervals from `t0`.
///
/// Waypoint velocities are finite differences of the neighbouring points.
pub fn polyline(map: &str, profile: &Profile, points: &[[f64; 2]], t0: f64) -> Trajectory {
    let mut trajectory = Trajectory::new(map);
    let last = points.len().saturating_sub(1);
    for (k, p) in points.iter().enumerate() {
        let (lo, hi) = (k.saturating_sub(1), (k + 1).min(last));
        let span = (hi - lo).max(1) as f64;
        let velocity = Vec3::new(
            (points[hi][0] - points[lo][0]) / span,
            (points[hi][1] - points[lo][1]) / span,
            0.0,
        );
        trajectory
            .insert(secs(t0 + k as f64), profile.clone(), Vec3::new(p[0], p[1], 0.0), velocity)
            .expect("unique time");
    }
    trajectory
}

/// Routes `tracing` output through the test harness; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
