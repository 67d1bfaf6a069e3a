// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec2;

/// Axis-aligned bounding box in map coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are metres on the map plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        assert!(
            min.x() <= max.x() && min.y() <= max.y(),
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Builds a box from per-axis `[min, max]` intervals.
    ///
    /// # Panics
    /// Panics if either interval is reversed.
    pub fn from_intervals(x: [f64; 2], y: [f64; 2]) -> Self {
        Self::new(Vec2::new(x[0], y[0]), Vec2::new(x[1], y[1]))
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max.x() < other.min.x()
            || other.max.x() < self.min.x()
            || self.max.y() < other.min.y()
            || other.max.y() < self.min.y())
    }

    /// Returns the union of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Vec2::new(self.min.x().min(other.min.x()), self.min.y().min(other.min.y())),
            max: Vec2::new(self.max.x().max(other.max.x()), self.max.y().max(other.max.y())),
        }
    }

    /// Inflates the box by a uniform margin `m` on every side.
    ///
    /// `m` must be non-negative; a negative margin could invert the box.
    pub fn inflate(&self, m: f64) -> Self {
        debug_assert!(m >= 0.0, "negative inflation margin {m}");
        let delta = Vec2::new(m, m);
        Self {
            min: self.min.sub(&delta),
            max: self.max.add(&delta),
        }
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    pub fn from_points(points: &[Vec2]) -> Self {
        assert!(!points.is_empty(), "from_points requires at least one point");
        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min = Vec2::new(min.x().min(p.x()), min.y().min(p.y()));
            max = Vec2::new(max.x().max(p.x()), max.y().max(p.y()));
        }
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_faces_overlap() {
        let a = Aabb::from_intervals([0.0, 1.0], [0.0, 1.0]);
        let b = Aabb::from_intervals([1.0, 2.0], [0.5, 3.0]);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn separated_on_one_axis_is_disjoint() {
        let a = Aabb::from_intervals([0.0, 1.0], [0.0, 1.0]);
        let b = Aabb::from_intervals([0.0, 1.0], [1.0 + 1e-9, 2.0]);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn inflate_grows_both_sides() {
        let a = Aabb::from_intervals([0.0, 1.0], [2.0, 3.0]).inflate(0.5);
        assert_eq!(a.min().to_array(), [-0.5, 1.5]);
        assert_eq!(a.max().to_array(), [1.5, 3.5]);
    }

    #[test]
    fn union_and_from_points_agree() {
        let pts = [Vec2::new(1.0, -1.0), Vec2::new(-2.0, 4.0), Vec2::new(0.0, 0.0)];
        let from_pts = Aabb::from_points(&pts);
        let unioned = Aabb::from_points(&pts[..1]).union(&Aabb::from_points(&pts[1..]));
        assert_eq!(from_pts, unioned);
        assert_eq!(from_pts.min().to_array(), [-2.0, -1.0]);
        assert_eq!(from_pts.max().to_array(), [1.0, 4.0]);
    }
}
