// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use nalgebra as na;
use parry2d_f64::query;
use parry2d_f64::shape::{Ball, Cuboid, Shape as ParryShape};

use crate::math::Isometry;
use crate::shape::ConvexShape;

/// Separation distance between two posed convex shapes.
///
/// Returns `0.0` when the shapes touch or overlap.
pub fn distance(a: &ConvexShape, pose_a: &Isometry, b: &ConvexShape, pose_b: &Isometry) -> f64 {
    let (pa, pb) = (to_parry(pose_a), to_parry(pose_b));
    with_parry_shape(a, |ga| {
        with_parry_shape(b, |gb| {
            // Ball and cuboid pairs are always supported; an unsupported pair
            // reads as touching.
            query::distance(&pa, ga, &pb, gb).unwrap_or(0.0)
        })
    })
}

fn to_parry(pose: &Isometry) -> na::Isometry2<f64> {
    let t = pose.translation();
    na::Isometry2::new(na::Vector2::new(t.x(), t.y()), pose.yaw())
}

fn with_parry_shape<R>(shape: &ConvexShape, f: impl FnOnce(&dyn ParryShape) -> R) -> R {
    match *shape {
        ConvexShape::Circle { radius } => f(&Ball::new(radius)),
        ConvexShape::Box { width, height } => {
            f(&Cuboid::new(na::Vector2::new(0.5 * width, 0.5 * height)))
        }
    }
}
