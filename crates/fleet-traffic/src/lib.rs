// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Spatiotemporal conflict detection for robot fleets.

A [`Trajectory`] is a time-ordered list of waypoints on a named map. Each pair
of consecutive waypoints forms a segment, modelled as a cubic [`Spline`] and
carrying the collision [`Profile`] of its leading waypoint.

Entry points:
- [`possible_conflict`] / [`broad_phase`]: bounding-box screening.
- [`detect`]: broad phase, then exact swept collision per overlapping segment
  pair, returning [`ConflictData`] in time order.
- [`detect_region`]: one trajectory against a static [`Spacetime`] region.

[`ConflictDetector`] binds the same operations to a caller-chosen
continuous-collision backend.
"]

/// Conflict detection between trajectories and against regions.
pub mod conflict;
/// Segment geometry profiles.
pub mod profile;
/// Static spacetime regions.
pub mod spacetime;
/// Per-segment cubic motion model.
pub mod spline;
/// Nanosecond timestamps and durations.
pub mod time;
/// Waypoints, trajectories and segments.
pub mod trajectory;

pub use conflict::{
    broad_phase, detect, detect_region, possible_conflict, ConflictData, ConflictDetector,
    DetectionError, InvalidTrajectoryError, OverlappingSegments,
};
pub use profile::Profile;
pub use spacetime::Spacetime;
pub use spline::Spline;
pub use time::{Duration, Time};
pub use trajectory::{Segment, Trajectory, TrajectoryError, Waypoint};
