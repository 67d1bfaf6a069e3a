// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Planar geometry for fleet traffic.

This crate provides:
- Planar math (`Vec2`, `Vec3` robot states, `Isometry` poses).
- Axis-aligned bounding boxes (`Aabb`) with inclusive overlap.
- Convex shapes (`ConvexShape`) and composite shapes (`Shape`).
- Separation distance between posed convex shapes (parry).
- Swept-motion descriptors (`SplineMotion`, `StaticMotion`).
- A continuous-collision capability (`ContinuousCollision`) and its in-tree
  conservative-advancement implementation (`CcdSolver`).

Design notes:
- `f64` throughout; trajectories span hours at nanosecond resolution.
- Pure functions only: every query may run concurrently with any other.
"]

/// Continuous collision between moving convex shapes.
pub mod ccd;
/// Planar vectors, robot states and poses.
pub mod math;
/// Swept-motion descriptors.
pub mod motion;
/// Proximity queries.
pub mod query;
/// Convex and composite collision shapes.
pub mod shape;
/// Bounding volumes.
pub mod types;

pub use ccd::{
    CcdError, CcdRequestError, CcdSolver, CcdSolverType, ContinuousCollision,
    ContinuousCollisionRequest, ContinuousCollisionResult,
};
pub use math::{Isometry, Vec2, Vec3};
pub use motion::{
    cubic::Cubic, relative_motion_bound, spline::SplineMotion, Motion, StaticMotion,
};
pub use shape::{ConvexShape, Shape, ShapeError, ShapePiece};
pub use types::aabb::Aabb;
