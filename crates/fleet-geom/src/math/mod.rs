// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Planar math helpers: vectors, `(x, y, yaw)` states, and rigid poses.
//!
//! Everything is `f64`. Waypoint timestamps are nanosecond-resolution and the
//! spline fits divide by segment durations, so single precision loses too much.

mod isometry;
mod vec2;
mod vec3;

pub use isometry::Isometry;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f64 = 1e-12;
