// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::sync::Arc;

use fleet_geom::{Isometry, Shape};

use crate::time::Time;

/// Static shape at a fixed pose, optionally limited to a time window.
///
/// Regions never move; the bounds only restrict when a trajectory is checked
/// against them. A missing bound leaves that side open.
#[derive(Debug, Clone, PartialEq)]
pub struct Spacetime {
    pose: Isometry,
    shape: Arc<Shape>,
    lower_time_bound: Option<Time>,
    upper_time_bound: Option<Time>,
}

impl Spacetime {
    /// Unbounded region of `shape` placed at `pose`.
    pub fn new(pose: Isometry, shape: impl Into<Arc<Shape>>) -> Self {
        Self {
            pose,
            shape: shape.into(),
            lower_time_bound: None,
            upper_time_bound: None,
        }
    }

    /// Ignores everything before `time`.
    pub fn with_lower_time_bound(mut self, time: Time) -> Self {
        self.lower_time_bound = Some(time);
        self
    }

    /// Ignores everything after `time`.
    pub fn with_upper_time_bound(mut self, time: Time) -> Self {
        self.upper_time_bound = Some(time);
        self
    }

    /// Map-frame pose of the shape origin.
    pub fn pose(&self) -> &Isometry {
        &self.pose
    }

    /// Region geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Earliest time of interest.
    pub fn lower_time_bound(&self) -> Option<Time> {
        self.lower_time_bound
    }

    /// Latest time of interest.
    pub fn upper_time_bound(&self) -> Option<Time> {
        self.upper_time_bound
    }
}
