// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::sync::Arc;

use fleet_geom::ConvexShape;

/// Collision geometry attached to a trajectory segment.
///
/// Profiles are immutable and usually shared between many waypoints of the
/// same robot, hence the `Arc`s.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    shape: Option<Arc<ConvexShape>>,
    vicinity: Option<Arc<ConvexShape>>,
}

impl Profile {
    /// Profile whose footprint and vicinity are both `shape`.
    pub fn new(shape: ConvexShape) -> Self {
        let shape = Arc::new(shape);
        Self {
            vicinity: Some(Arc::clone(&shape)),
            shape: Some(shape),
        }
    }

    /// Profile with a distinct awareness region around the footprint.
    pub fn with_vicinity(shape: ConvexShape, vicinity: ConvexShape) -> Self {
        Self {
            shape: Some(Arc::new(shape)),
            vicinity: Some(Arc::new(vicinity)),
        }
    }

    /// Profile with no geometry. Conflict checks reject segments that use it.
    pub const fn shapeless() -> Self {
        Self {
            shape: None,
            vicinity: None,
        }
    }

    /// Footprint used for collision checks.
    pub fn shape(&self) -> Option<&ConvexShape> {
        self.shape.as_deref()
    }

    /// Awareness region around the footprint.
    pub fn vicinity(&self) -> Option<&ConvexShape> {
        self.vicinity.as_deref()
    }
}
