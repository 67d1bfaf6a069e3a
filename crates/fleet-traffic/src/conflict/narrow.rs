// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fleet_geom::{ContinuousCollision, ConvexShape};
use tracing::{debug, instrument};

use crate::conflict::{ConflictData, DetectionError, InvalidTrajectoryError, OverlappingSegments};
use crate::spline::Spline;
use crate::trajectory::{Segment, Trajectory};

fn shape_of<'a>(segment: &Segment<'a>) -> Result<&'a ConvexShape, InvalidTrajectoryError> {
    segment
        .profile()
        .shape()
        .ok_or(InvalidTrajectoryError::MissingShape {
            time: segment.start_time(),
        })
}

#[instrument(level = "debug", skip_all, fields(map = a.map_name(), quit_after_one = quit_after_one))]
pub(crate) fn narrow_phase<C: ContinuousCollision>(
    backend: &C,
    a: &Trajectory,
    b: &Trajectory,
    quit_after_one: bool,
) -> Result<Vec<ConflictData>, DetectionError> {
    let mut conflicts = Vec::new();
    for (sa, sb) in OverlappingSegments::new(a, b)? {
        let (shape_a, shape_b) = (shape_of(&sa)?, shape_of(&sb)?);
        let start = sa.start_time().max(sb.start_time());
        let finish = sa.finish_time().min(sb.finish_time());
        let motion_a = Spline::new(sa).to_motion(start, finish);
        let motion_b = Spline::new(sb).to_motion(start, finish);

        let result = backend
            .collide(shape_a, &motion_a, shape_b, &motion_b)
            .map_err(|source| DetectionError::Unresolved { time: start, source })?;
        let Some(s) = result.time_of_contact() else {
            continue;
        };
        let time = start + (finish - start).mul_f64(s);
        debug!(%time, segment_a = sa.index(), segment_b = sb.index(), "conflict");
        conflicts.push(ConflictData {
            time,
            segments: (sa.index(), sb.index()),
        });
        if quit_after_one {
            break;
        }
    }
    Ok(conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::time::Time;
    use fleet_geom::{CcdError, CcdSolver, ContinuousCollisionResult, Motion, Vec3};
    use std::cell::Cell;

    /// Backend that reports contact halfway through every window.
    #[derive(Default)]
    struct Halfway {
        calls: Cell<usize>,
    }

    impl ContinuousCollision for Halfway {
        fn collide(
            &self,
            _: &ConvexShape,
            _: &dyn Motion,
            _: &ConvexShape,
            _: &dyn Motion,
        ) -> Result<ContinuousCollisionResult, CcdError> {
            self.calls.set(self.calls.get() + 1);
            Ok(ContinuousCollisionResult::contact(0.5))
        }
    }

    /// Backend that never settles.
    struct Stuck;

    impl ContinuousCollision for Stuck {
        fn collide(
            &self,
            _: &ConvexShape,
            _: &dyn Motion,
            _: &ConvexShape,
            _: &dyn Motion,
        ) -> Result<ContinuousCollisionResult, CcdError> {
            Err(CcdError::Unresolved {
                iterations: 1,
                reached: 0.25,
            })
        }
    }

    fn parked(times: &[f64]) -> Trajectory {
        let profile = Profile::new(ConvexShape::Circle { radius: 0.5 });
        let mut t = Trajectory::new("L1");
        for &s in times {
            t.insert(Time::from_secs_f64(s), profile.clone(), Vec3::ZERO, Vec3::ZERO)
                .expect("unique time");
        }
        t
    }

    #[test]
    fn contact_time_maps_into_overlap_window() {
        let a = parked(&[0.0, 4.0]);
        let b = parked(&[2.0, 10.0]);
        let backend = Halfway::default();
        let found = narrow_phase(&backend, &a, &b, false).expect("valid");
        assert_eq!(
            found,
            vec![ConflictData {
                time: Time::from_secs_f64(3.0),
                segments: (0, 0),
            }]
        );
    }

    #[test]
    fn quit_after_one_stops_calling_backend() {
        let a = parked(&[0.0, 1.0, 2.0, 3.0]);
        let b = parked(&[0.0, 3.0]);
        let backend = Halfway::default();
        assert_eq!(narrow_phase(&backend, &a, &b, false).expect("valid").len(), 3);
        backend.calls.set(0);
        assert_eq!(narrow_phase(&backend, &a, &b, true).expect("valid").len(), 1);
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn coincident_parked_robots_touch_immediately() {
        let a = parked(&[0.0, 2.0]);
        let b = parked(&[0.0, 2.0]);
        let found = narrow_phase(&CcdSolver::default(), &a, &b, true).expect("valid");
        assert_eq!(found[0].time, Time::from_secs_f64(0.0));
    }

    #[test]
    fn undecided_window_is_an_error_not_a_conflict() {
        let a = parked(&[0.0, 4.0]);
        let b = parked(&[2.0, 10.0]);
        assert_eq!(
            narrow_phase(&Stuck, &a, &b, false),
            Err(DetectionError::Unresolved {
                time: Time::from_secs_f64(2.0),
                source: CcdError::Unresolved {
                    iterations: 1,
                    reached: 0.25,
                },
            })
        );
    }
}
