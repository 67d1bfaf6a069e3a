// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fleet_geom::Vec3;
use thiserror::Error;

use crate::profile::Profile;
use crate::time::{Duration, Time};

/// Errors raised while editing a [`Trajectory`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    /// A waypoint already exists at this timestamp.
    #[error("trajectory already has a waypoint at {time}")]
    DuplicateTime {
        /// The rejected timestamp.
        time: Time,
    },
    /// Position or velocity holds a NaN or infinite component.
    #[error("waypoint at {time} has a non-finite position or velocity")]
    NonFiniteState {
        /// The rejected timestamp.
        time: Time,
    },
}

/// Timestamped robot state plus the profile of the segment it begins.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    time: Time,
    profile: Profile,
    position: Vec3,
    velocity: Vec3,
}

impl Waypoint {
    /// When the robot reaches this state.
    pub fn time(&self) -> Time {
        self.time
    }

    /// Geometry of the segment that starts here.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// `(x, y, yaw)` position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// `(x, y, yaw)` velocity, per second.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}

/// Time-ordered waypoints of one robot on one named map.
///
/// Timestamps are strictly increasing, so every [`Segment`] has positive
/// duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    map: String,
    waypoints: Vec<Waypoint>,
}

impl Trajectory {
    /// Empty trajectory on `map`.
    pub fn new(map: impl Into<String>) -> Self {
        Self {
            map: map.into(),
            waypoints: Vec::new(),
        }
    }

    /// Inserts a waypoint in time order and returns its index.
    ///
    /// # Errors
    /// [`TrajectoryError::NonFiniteState`] if `position` or `velocity` is not
    /// finite; [`TrajectoryError::DuplicateTime`] if a waypoint already exists
    /// at `time`.
    pub fn insert(
        &mut self,
        time: Time,
        profile: Profile,
        position: Vec3,
        velocity: Vec3,
    ) -> Result<usize, TrajectoryError> {
        if !(position.is_finite() && velocity.is_finite()) {
            return Err(TrajectoryError::NonFiniteState { time });
        }
        match self.waypoints.binary_search_by_key(&time, Waypoint::time) {
            Ok(_) => Err(TrajectoryError::DuplicateTime { time }),
            Err(index) => {
                self.waypoints.insert(
                    index,
                    Waypoint {
                        time,
                        profile,
                        position,
                        velocity,
                    },
                );
                Ok(index)
            }
        }
    }

    /// Name of the map this trajectory lives on.
    pub fn map_name(&self) -> &str {
        &self.map
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether there are no waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Time of the first waypoint.
    pub fn start_time(&self) -> Option<Time> {
        self.waypoints.first().map(Waypoint::time)
    }

    /// Time of the last waypoint.
    pub fn finish_time(&self) -> Option<Time> {
        self.waypoints.last().map(Waypoint::time)
    }

    /// Span from the first to the last waypoint; zero when empty.
    pub fn duration(&self) -> Duration {
        match (self.start_time(), self.finish_time()) {
            (Some(start), Some(finish)) => finish - start,
            _ => Duration::ZERO,
        }
    }

    /// Waypoint at `index`.
    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// All waypoints in time order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of segments, one less than the number of waypoints.
    pub fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// Segment `index`, spanning waypoints `index` and `index + 1`.
    pub fn segment(&self, index: usize) -> Option<Segment<'_>> {
        (index < self.segment_count()).then_some(Segment {
            trajectory: self,
            index,
        })
    }

    /// Segments in time order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment<'_>> + '_ {
        (0..self.segment_count()).map(move |index| Segment {
            trajectory: self,
            index,
        })
    }

    /// Index of the segment containing `time`: the first one whose finish is
    /// not before `time`.
    ///
    /// Returns `None` when `time` lies outside `[start_time, finish_time]` or
    /// there are no segments.
    pub fn find(&self, time: Time) -> Option<usize> {
        let (start, finish) = (self.start_time()?, self.finish_time()?);
        if self.segment_count() == 0 || time < start || time > finish {
            return None;
        }
        Some(self.waypoints[1..].partition_point(|w| w.time < time))
    }
}

/// Borrowed view of the motion between two consecutive waypoints.
#[derive(Debug, Copy, Clone)]
pub struct Segment<'a> {
    trajectory: &'a Trajectory,
    index: usize,
}

impl<'a> Segment<'a> {
    /// Ordinal of this segment in its trajectory.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The trajectory this segment belongs to.
    pub fn trajectory(&self) -> &'a Trajectory {
        self.trajectory
    }

    /// Leading waypoint.
    pub fn start(&self) -> &'a Waypoint {
        &self.trajectory.waypoints[self.index]
    }

    /// Trailing waypoint.
    pub fn finish(&self) -> &'a Waypoint {
        &self.trajectory.waypoints[self.index + 1]
    }

    /// Time of the leading waypoint.
    pub fn start_time(&self) -> Time {
        self.start().time
    }

    /// Time of the trailing waypoint.
    pub fn finish_time(&self) -> Time {
        self.finish().time
    }

    /// Positive length of the segment.
    pub fn duration(&self) -> Duration {
        self.finish_time() - self.start_time()
    }

    /// Profile of the leading waypoint, which governs the whole segment.
    pub fn profile(&self) -> &'a Profile {
        &self.start().profile
    }
}

impl PartialEq for Segment<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.trajectory, other.trajectory) && self.index == other.index
    }
}
