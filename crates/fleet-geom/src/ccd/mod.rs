// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Continuous collision between two moving convex shapes.
//!
//! The [`ContinuousCollision`] trait is the only thing conflict detection
//! depends on: submit two `(shape, motion)` pairs, get back whether they touch
//! within the motions' window and, if so, the normalized time of first contact.
//! [`CcdSolver`] is the in-tree implementation.

use thiserror::Error;

use crate::motion::Motion;
use crate::shape::ConvexShape;

#[doc = "Solver selection and tolerances."]
pub mod request;
#[doc = "Conservative-advancement and sampling solvers."]
pub mod solver;

pub use request::{CcdRequestError, CcdSolverType, ContinuousCollisionRequest};
pub use solver::CcdSolver;

/// Outcome of a continuous collision query.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContinuousCollisionResult {
    time_of_contact: Option<f64>,
}

impl ContinuousCollisionResult {
    /// The shapes stay apart for the whole window.
    pub const fn separated() -> Self {
        Self {
            time_of_contact: None,
        }
    }

    /// The shapes first touch at normalized time `s` (clamped into `[0, 1]`).
    pub fn contact(s: f64) -> Self {
        Self {
            time_of_contact: Some(s.clamp(0.0, 1.0)),
        }
    }

    /// Whether contact happens within the window.
    pub const fn is_collide(&self) -> bool {
        self.time_of_contact.is_some()
    }

    /// Normalized time of first contact, if any.
    pub const fn time_of_contact(&self) -> Option<f64> {
        self.time_of_contact
    }
}

/// A continuous collision query that could not be answered.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum CcdError {
    /// Conservative advancement used its whole step budget without reaching
    /// contact or the end of the window.
    #[error("conservative advancement stopped at s = {reached} after {iterations} steps")]
    Unresolved {
        /// Steps taken.
        iterations: usize,
        /// Normalized time reached; the window before it is contact-free.
        reached: f64,
    },
}

/// Capability: swept collision between two moving convex shapes.
///
/// Implementations must be pure; conflict checks call this from many threads
/// at once with private motion instances.
pub trait ContinuousCollision {
    /// Tests whether `shape_a` following `motion_a` ever touches `shape_b`
    /// following `motion_b` over normalized time `[0, 1]`.
    ///
    /// # Errors
    /// [`CcdError`] when the backend cannot decide within its budget. A
    /// backend never guesses contact or separation.
    fn collide(
        &self,
        shape_a: &ConvexShape,
        motion_a: &dyn Motion,
        shape_b: &ConvexShape,
        motion_b: &dyn Motion,
    ) -> Result<ContinuousCollisionResult, CcdError>;
}

impl<C: ContinuousCollision + ?Sized> ContinuousCollision for &C {
    fn collide(
        &self,
        shape_a: &ConvexShape,
        motion_a: &dyn Motion,
        shape_b: &ConvexShape,
        motion_b: &dyn Motion,
    ) -> Result<ContinuousCollisionResult, CcdError> {
        (**self).collide(shape_a, motion_a, shape_b, motion_b)
    }
}
