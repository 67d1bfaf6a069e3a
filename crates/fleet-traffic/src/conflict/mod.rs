// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Trajectory-vs-trajectory and trajectory-vs-region conflict detection.
//!
//! Detection runs in two phases. The broad phase walks both trajectories in
//! lockstep and compares per-segment bounding boxes; it may report conflicts
//! that do not exist but never misses one. The narrow phase hands each pair of
//! time-overlapping segments to a [`ContinuousCollision`] backend and maps its
//! normalized time of contact back onto real time.
//!
//! Every entry point is a pure function of its inputs. Callers screening a
//! whole fleet may run any number of checks in parallel over shared
//! trajectories.

use fleet_geom::{
    CcdError, CcdRequestError, CcdSolver, ContinuousCollision, ContinuousCollisionRequest,
};
use thiserror::Error;

use crate::spacetime::Spacetime;
use crate::time::Time;
use crate::trajectory::Trajectory;

mod broad;
mod iter;
mod narrow;
mod region;

pub use iter::OverlappingSegments;

/// A trajectory that cannot be checked for conflicts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTrajectoryError {
    /// Conflict checks need at least one segment, hence two waypoints.
    #[error("trajectory has {waypoints} waypoint(s); conflict checks need at least 2")]
    TooFewWaypoints {
        /// Waypoints in the shortest trajectory supplied.
        waypoints: usize,
    },
    /// A segment's profile carries no collision shape.
    #[error("segment starting at {time} has no collision shape")]
    MissingShape {
        /// Start of the offending segment.
        time: Time,
    },
}

/// A conflict check that could not finish.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DetectionError {
    /// The inputs cannot be checked at all.
    #[error(transparent)]
    InvalidTrajectory(#[from] InvalidTrajectoryError),
    /// The backend could not decide a window within its step budget.
    ///
    /// Neither a conflict nor its absence is reported for the pair.
    #[error("collision check of the window starting at {time} did not resolve")]
    Unresolved {
        /// Start of the undecided window.
        time: Time,
        /// Backend failure.
        #[source]
        source: CcdError,
    },
}

/// First contact between two trajectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictData {
    /// When the shapes first touch.
    pub time: Time,
    /// Segment ordinals in the first and second trajectory.
    pub segments: (usize, usize),
}

pub(crate) fn require_segments(
    trajectories: &[&Trajectory],
) -> Result<(), InvalidTrajectoryError> {
    let waypoints = trajectories.iter().map(|t| t.len()).min().unwrap_or(0);
    if waypoints < 2 {
        return Err(InvalidTrajectoryError::TooFewWaypoints { waypoints });
    }
    Ok(())
}

/// Conflict detection bound to a continuous-collision backend.
///
/// The backend is the only configurable piece; [`ConflictDetector::new`]
/// builds the in-tree solver from a validated request.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector<C = CcdSolver> {
    backend: C,
}

impl ConflictDetector<CcdSolver> {
    /// Detector using the in-tree solver configured by `request`.
    pub fn new(request: ContinuousCollisionRequest) -> Result<Self, CcdRequestError> {
        Ok(Self::with_backend(CcdSolver::new(request)?))
    }
}

impl<C: ContinuousCollision> ConflictDetector<C> {
    /// Detector using a caller-supplied backend.
    pub const fn with_backend(backend: C) -> Self {
        Self { backend }
    }

    /// The collision backend.
    pub fn backend(&self) -> &C {
        &self.backend
    }

    /// Full check: broad phase, then narrow phase if the broad phase passes.
    ///
    /// With `quit_after_one` the result holds at most the first conflict.
    ///
    /// # Errors
    /// [`DetectionError::InvalidTrajectory`] if either trajectory has fewer
    /// than two waypoints or a segment that needs checking has no shape;
    /// [`DetectionError::Unresolved`] if the backend cannot decide a window.
    pub fn between(
        &self,
        a: &Trajectory,
        b: &Trajectory,
        quit_after_one: bool,
    ) -> Result<Vec<ConflictData>, DetectionError> {
        if !broad::broad_phase(a, b)? {
            return Ok(Vec::new());
        }
        self.narrow_phase(a, b, quit_after_one)
    }

    /// Exact check of every pair of time-overlapping segments.
    ///
    /// Does not compare map names; use [`ConflictDetector::between`] unless
    /// the broad phase has already passed.
    pub fn narrow_phase(
        &self,
        a: &Trajectory,
        b: &Trajectory,
        quit_after_one: bool,
    ) -> Result<Vec<ConflictData>, DetectionError> {
        narrow::narrow_phase(&self.backend, a, b, quit_after_one)
    }

    /// Checks `trajectory` against a static spacetime region.
    ///
    /// With `output`, the scan covers the whole window and each colliding
    /// segment index is appended exactly once, even when several pieces of a
    /// compound region touch that segment; pieces are not reported separately.
    /// Without it the call returns on the first hit.
    ///
    /// # Errors
    /// As for [`ConflictDetector::between`].
    pub fn detect_region(
        &self,
        trajectory: &Trajectory,
        region: &Spacetime,
        output: Option<&mut Vec<usize>>,
    ) -> Result<bool, DetectionError> {
        region::detect_region(&self.backend, trajectory, region, output)
    }
}

/// Cheap screening: `false` proves the trajectories cannot conflict.
///
/// # Errors
/// [`InvalidTrajectoryError`] if either trajectory has fewer than two
/// waypoints or a segment in the overlap has no shape.
pub fn broad_phase(a: &Trajectory, b: &Trajectory) -> Result<bool, InvalidTrajectoryError> {
    broad::broad_phase(a, b)
}

/// Alias of [`broad_phase`].
pub fn possible_conflict(a: &Trajectory, b: &Trajectory) -> Result<bool, InvalidTrajectoryError> {
    broad::broad_phase(a, b)
}

/// [`ConflictDetector::between`] with the default solver.
pub fn detect(
    a: &Trajectory,
    b: &Trajectory,
    quit_after_one: bool,
) -> Result<Vec<ConflictData>, DetectionError> {
    ConflictDetector::<CcdSolver>::default().between(a, b, quit_after_one)
}

/// [`ConflictDetector::detect_region`] with the default solver.
///
/// Colliding segments are listed once each, not once per region piece.
pub fn detect_region(
    trajectory: &Trajectory,
    region: &Spacetime,
    output: Option<&mut Vec<usize>>,
) -> Result<bool, DetectionError> {
    ConflictDetector::<CcdSolver>::default().detect_region(trajectory, region, output)
}
