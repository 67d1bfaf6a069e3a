// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::{instrument, trace};

use crate::conflict::{InvalidTrajectoryError, OverlappingSegments};
use crate::spline::Spline;
use crate::trajectory::Trajectory;

#[instrument(level = "debug", skip_all, fields(map_a = a.map_name(), map_b = b.map_name()))]
pub(crate) fn broad_phase(a: &Trajectory, b: &Trajectory) -> Result<bool, InvalidTrajectoryError> {
    let pairs = OverlappingSegments::new(a, b)?;
    if a.map_name() != b.map_name() {
        trace!("different maps");
        return Ok(false);
    }
    for (sa, sb) in pairs {
        let box_a = Spline::new(sa).bounding_box()?;
        let box_b = Spline::new(sb).bounding_box()?;
        if box_a.overlaps(&box_b) {
            trace!(segment_a = sa.index(), segment_b = sb.index(), "bounding boxes overlap");
            return Ok(true);
        }
    }
    Ok(false)
}
