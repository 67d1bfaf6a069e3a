// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fleet_geom::{ContinuousCollision, StaticMotion};
use tracing::{debug, instrument, trace};

use crate::conflict::{require_segments, DetectionError, InvalidTrajectoryError};
use crate::spacetime::Spacetime;
use crate::spline::Spline;
use crate::trajectory::Trajectory;

#[instrument(level = "debug", skip_all, fields(map = trajectory.map_name(), collect = output.is_some()))]
pub(crate) fn detect_region<C: ContinuousCollision>(
    backend: &C,
    trajectory: &Trajectory,
    region: &Spacetime,
    mut output: Option<&mut Vec<usize>>,
) -> Result<bool, DetectionError> {
    require_segments(&[trajectory])?;
    let (Some(t0), Some(t1)) = (trajectory.start_time(), trajectory.finish_time()) else {
        return Ok(false);
    };
    let start = region.lower_time_bound().map_or(t0, |lower| lower.max(t0));
    let finish = region.upper_time_bound().map_or(t1, |upper| upper.min(t1));
    if finish < start {
        trace!(%start, %finish, "empty region window");
        return Ok(false);
    }
    let (Some(first), Some(last)) = (trajectory.find(start), trajectory.find(finish)) else {
        return Ok(false);
    };

    let region_box = region.shape().aabb(region.pose());
    let mut found = false;
    for segment in (first..=last).filter_map(|i| trajectory.segment(i)) {
        let shape = segment
            .profile()
            .shape()
            .ok_or(InvalidTrajectoryError::MissingShape {
                time: segment.start_time(),
            })?;
        let spline = Spline::new(segment);
        if !spline.bounding_box()?.overlaps(&region_box) {
            continue;
        }
        let window_start = segment.start_time().max(start);
        let motion = spline.to_motion(window_start, segment.finish_time().min(finish));
        for piece in region.shape().pieces() {
            let fixed = StaticMotion::new(region.pose().compose(&piece.offset()));
            let result = backend
                .collide(shape, &motion, piece.shape(), &fixed)
                .map_err(|source| DetectionError::Unresolved {
                    time: window_start,
                    source,
                })?;
            if !result.is_collide() {
                continue;
            }
            debug!(segment = segment.index(), "trajectory enters region");
            found = true;
            match output.as_mut() {
                Some(out) => {
                    out.push(segment.index());
                    break;
                }
                None => return Ok(true),
            }
        }
    }
    Ok(found)
}
