// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::ccd::{
    CcdError, CcdRequestError, CcdSolverType, ContinuousCollision, ContinuousCollisionRequest,
    ContinuousCollisionResult,
};
use crate::math::EPSILON;
use crate::motion::{relative_motion_bound, Motion};
use crate::query::distance::distance;
use crate::shape::ConvexShape;

/// In-tree continuous-collision backend.
///
/// Conservative advancement (the default) is exact up to `tolerance`: each
/// step advances by the current separation divided by a bound on how fast the
/// two shapes approach each other over the rest of the window, so they cannot
/// pass through each other between samples. Shapes moving together never
/// approach, and are cleared in one step however close they are.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CcdSolver {
    request: ContinuousCollisionRequest,
}

impl CcdSolver {
    /// Builds a solver after validating `request`.
    pub fn new(request: ContinuousCollisionRequest) -> Result<Self, CcdRequestError> {
        request.validate()?;
        Ok(Self { request })
    }

    /// The active request.
    pub fn request(&self) -> &ContinuousCollisionRequest {
        &self.request
    }

    fn separation(
        shape_a: &ConvexShape,
        motion_a: &dyn Motion,
        shape_b: &ConvexShape,
        motion_b: &dyn Motion,
        s: f64,
    ) -> f64 {
        distance(shape_a, &motion_a.pose_at(s), shape_b, &motion_b.pose_at(s))
    }

    fn conservative_advancement(
        &self,
        shape_a: &ConvexShape,
        motion_a: &dyn Motion,
        shape_b: &ConvexShape,
        motion_b: &dyn Motion,
    ) -> Result<ContinuousCollisionResult, CcdError> {
        let radius_a = shape_a.characteristic_length();
        let radius_b = shape_b.characteristic_length();
        let mut s = 0.0;
        for _ in 0..self.request.max_iterations {
            let d = Self::separation(shape_a, motion_a, shape_b, motion_b, s);
            if d <= self.request.tolerance {
                return Ok(ContinuousCollisionResult::contact(s));
            }
            let bound = relative_motion_bound(motion_a, radius_a, motion_b, radius_b, s, 1.0);
            if bound <= EPSILON {
                return Ok(ContinuousCollisionResult::separated());
            }
            s += d / bound;
            if s > 1.0 {
                return Ok(ContinuousCollisionResult::separated());
            }
        }
        trace!(
            s,
            max_iterations = self.request.max_iterations,
            "conservative advancement exhausted its step budget"
        );
        Err(CcdError::Unresolved {
            iterations: self.request.max_iterations,
            reached: s,
        })
    }

    fn naive(
        &self,
        shape_a: &ConvexShape,
        motion_a: &dyn Motion,
        shape_b: &ConvexShape,
        motion_b: &dyn Motion,
    ) -> ContinuousCollisionResult {
        let steps = self.request.naive_steps;
        (0..=steps)
            .map(|i| i as f64 / steps as f64)
            .find(|&s| {
                Self::separation(shape_a, motion_a, shape_b, motion_b, s) <= self.request.tolerance
            })
            .map_or_else(ContinuousCollisionResult::separated, ContinuousCollisionResult::contact)
    }
}

impl ContinuousCollision for CcdSolver {
    fn collide(
        &self,
        shape_a: &ConvexShape,
        motion_a: &dyn Motion,
        shape_b: &ConvexShape,
        motion_b: &dyn Motion,
    ) -> Result<ContinuousCollisionResult, CcdError> {
        match self.request.solver {
            CcdSolverType::ConservativeAdvancement => {
                self.conservative_advancement(shape_a, motion_a, shape_b, motion_b)
            }
            CcdSolverType::Naive => Ok(self.naive(shape_a, motion_a, shape_b, motion_b)),
        }
    }
}
