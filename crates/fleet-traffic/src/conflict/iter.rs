// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;
use core::iter::FusedIterator;

use tracing::trace;

use crate::conflict::{require_segments, InvalidTrajectoryError};
use crate::trajectory::{Segment, Trajectory};

/// Pairs of segments, one from each trajectory, whose time ranges overlap.
///
/// Pairs come out in time order. The cursor starts at the segment of the
/// earlier trajectory that contains the later one's start, then advances
/// whichever side finishes first (both on a tie). Segments that cannot
/// overlap the other side's current segment are skipped.
#[derive(Debug, Clone)]
pub struct OverlappingSegments<'a> {
    a: &'a Trajectory,
    b: &'a Trajectory,
    cursor: Option<(usize, usize)>,
}

impl<'a> OverlappingSegments<'a> {
    /// Aligns the two trajectories.
    ///
    /// # Errors
    /// [`InvalidTrajectoryError::TooFewWaypoints`] if either trajectory has
    /// no segments.
    pub fn new(a: &'a Trajectory, b: &'a Trajectory) -> Result<Self, InvalidTrajectoryError> {
        require_segments(&[a, b])?;
        let cursor = initial_cursor(a, b);
        if cursor.is_none() {
            trace!("time ranges do not overlap");
        }
        Ok(Self { a, b, cursor })
    }
}

fn initial_cursor(a: &Trajectory, b: &Trajectory) -> Option<(usize, usize)> {
    let (a0, a1) = (a.start_time()?, a.finish_time()?);
    let (b0, b1) = (b.start_time()?, b.finish_time()?);
    if a1 < b0 || b1 < a0 {
        return None;
    }
    match a0.cmp(&b0) {
        Ordering::Less => Some((a.find(b0)?, 0)),
        Ordering::Greater => Some((0, b.find(a0)?)),
        Ordering::Equal => Some((0, 0)),
    }
}

impl<'a> Iterator for OverlappingSegments<'a> {
    type Item = (Segment<'a>, Segment<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, j) = self.cursor?;
            let (Some(sa), Some(sb)) = (self.a.segment(i), self.b.segment(j)) else {
                self.cursor = None;
                return None;
            };
            if sa.finish_time() < sb.start_time() {
                self.cursor = Some((i + 1, j));
                continue;
            }
            if sb.finish_time() < sa.start_time() {
                self.cursor = Some((i, j + 1));
                continue;
            }
            self.cursor = Some(match sa.finish_time().cmp(&sb.finish_time()) {
                Ordering::Less => (i + 1, j),
                Ordering::Greater => (i, j + 1),
                Ordering::Equal => (i + 1, j + 1),
            });
            return Some((sa, sb));
        }
    }
}

impl FusedIterator for OverlappingSegments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::time::Time;
    use fleet_geom::{ConvexShape, Vec3};

    fn at(times: &[f64]) -> Trajectory {
        let profile = Profile::new(ConvexShape::Circle { radius: 0.5 });
        let mut t = Trajectory::new("L1");
        for &s in times {
            t.insert(Time::from_secs_f64(s), profile.clone(), Vec3::ZERO, Vec3::ZERO)
                .expect("unique time");
        }
        t
    }

    fn pairs(a: &Trajectory, b: &Trajectory) -> Vec<(usize, usize)> {
        OverlappingSegments::new(a, b)
            .expect("valid trajectories")
            .map(|(sa, sb)| (sa.index(), sb.index()))
            .collect()
    }

    #[test]
    fn aligned_starts_advance_earliest_finish() {
        let a = at(&[0.0, 2.0, 4.0, 6.0]);
        let b = at(&[0.0, 3.0, 6.0]);
        assert_eq!(pairs(&a, &b), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn later_start_aligns_earlier_trajectory() {
        let a = at(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let b = at(&[2.5, 5.0]);
        assert_eq!(pairs(&a, &b), vec![(2, 0), (3, 0)]);
        assert_eq!(pairs(&b, &a), vec![(0, 2), (0, 3)]);
    }

    #[test]
    fn disjoint_ranges_yield_nothing() {
        let a = at(&[0.0, 1.0]);
        let b = at(&[1.5, 2.0]);
        assert!(pairs(&a, &b).is_empty());
    }

    #[test]
    fn touching_ranges_yield_the_shared_instant() {
        let a = at(&[0.0, 1.0]);
        let b = at(&[1.0, 2.0]);
        assert_eq!(pairs(&a, &b), vec![(0, 0)]);
    }

    #[test]
    fn too_few_waypoints_is_rejected() {
        let a = at(&[0.0]);
        let b = at(&[0.0, 1.0]);
        assert_eq!(
            OverlappingSegments::new(&a, &b).err(),
            Some(InvalidTrajectoryError::TooFewWaypoints { waypoints: 1 })
        );
    }
}
