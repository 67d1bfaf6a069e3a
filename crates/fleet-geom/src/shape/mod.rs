// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Convex collision shapes and composite shapes built from them.
//!
//! Every shape is defined in its own local frame, centred on the origin, and
//! placed on the map by an [`Isometry`]. The characteristic length is the
//! radius of the smallest origin-centred circle that encloses the shape; it is
//! what bounding boxes and motion bounds inflate by.

use thiserror::Error;

use crate::math::{Isometry, Vec2};
use crate::types::aabb::Aabb;

/// Errors raised while building shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A size parameter was negative, NaN or infinite.
    #[error("shape dimension `{name}` must be finite and non-negative, got {value}")]
    InvalidDimension {
        /// Which dimension was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A composite shape was built without any pieces.
    #[error("composite shape requires at least one piece")]
    Empty,
}

fn check_dimension(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { name, value })
    }
}

/// A convex shape accepted by the continuous-collision backend.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConvexShape {
    /// Disc of the given radius.
    Circle {
        /// Radius in metres.
        radius: f64,
    },
    /// Rectangle centred on the origin, `width` along local X.
    Box {
        /// Extent along local X in metres.
        width: f64,
        /// Extent along local Y in metres.
        height: f64,
    },
}

impl ConvexShape {
    /// Builds a circle, rejecting negative or non-finite radii.
    pub fn circle(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self::Circle {
            radius: check_dimension("radius", radius)?,
        })
    }

    /// Builds a centred rectangle, rejecting negative or non-finite sides.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self::Box {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
        })
    }

    /// Radius of the smallest origin-centred circle enclosing the shape.
    pub fn characteristic_length(&self) -> f64 {
        match *self {
            Self::Circle { radius } => radius,
            Self::Box { width, height } => 0.5 * width.hypot(height),
        }
    }

    /// Map-frame bounding box of the shape placed at `pose`.
    pub fn aabb(&self, pose: &Isometry) -> Aabb {
        match *self {
            Self::Circle { radius } => {
                let c = pose.translation();
                Aabb::from_intervals(
                    [c.x() - radius, c.x() + radius],
                    [c.y() - radius, c.y() + radius],
                )
            }
            Self::Box { width, height } => Aabb::from_points(&box_corners(width, height, pose)),
        }
    }
}

fn box_corners(width: f64, height: f64, pose: &Isometry) -> [Vec2; 4] {
    let hx = 0.5 * width;
    let hy = 0.5 * height;
    [
        pose.transform_point(&Vec2::new(-hx, -hy)),
        pose.transform_point(&Vec2::new(hx, -hy)),
        pose.transform_point(&Vec2::new(hx, hy)),
        pose.transform_point(&Vec2::new(-hx, hy)),
    ]
}

/// One convex piece of a [`Shape`], with its placement in the shape frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapePiece {
    offset: Isometry,
    shape: ConvexShape,
}

impl ShapePiece {
    /// Placement of the piece relative to the shape origin.
    pub fn offset(&self) -> Isometry {
        self.offset
    }

    /// The convex geometry of the piece.
    pub fn shape(&self) -> &ConvexShape {
        &self.shape
    }
}

/// A possibly non-convex shape made of convex pieces.
///
/// Used for static spacetime regions, which may be any union of convex parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pieces: Vec<ShapePiece>,
}

impl Shape {
    /// Builds a composite shape from `(offset, piece)` pairs.
    pub fn new(pieces: impl IntoIterator<Item = (Isometry, ConvexShape)>) -> Result<Self, ShapeError> {
        let pieces: Vec<ShapePiece> = pieces
            .into_iter()
            .map(|(offset, shape)| ShapePiece { offset, shape })
            .collect();
        if pieces.is_empty() {
            return Err(ShapeError::Empty);
        }
        Ok(Self { pieces })
    }

    /// The convex pieces, in insertion order.
    pub fn pieces(&self) -> &[ShapePiece] {
        &self.pieces
    }

    /// Radius of the smallest origin-centred circle enclosing every piece.
    pub fn characteristic_length(&self) -> f64 {
        self.pieces
            .iter()
            .map(|p| p.offset.translation().length() + p.shape.characteristic_length())
            .fold(0.0, f64::max)
    }

    /// Map-frame bounding box of the whole shape placed at `pose`.
    pub fn aabb(&self, pose: &Isometry) -> Aabb {
        let mut pieces = self.pieces.iter().map(|p| p.shape.aabb(&pose.compose(&p.offset)));
        // `new` rejects empty piece lists, so the fold always has a seed.
        let first = pieces.next().unwrap_or_else(|| Aabb::from_points(&[pose.translation()]));
        pieces.fold(first, |acc, bb| acc.union(&bb))
    }
}

impl From<ConvexShape> for Shape {
    fn from(shape: ConvexShape) -> Self {
        Self {
            pieces: vec![ShapePiece {
                offset: Isometry::identity(),
                shape,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn characteristic_lengths() {
        assert_eq!(ConvexShape::circle(0.7).map(|s| s.characteristic_length()), Ok(0.7));
        let b = ConvexShape::rectangle(6.0, 8.0).map(|s| s.characteristic_length());
        assert_eq!(b, Ok(5.0));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            ConvexShape::circle(-1.0),
            Err(ShapeError::InvalidDimension { name: "radius", .. })
        ));
        assert!(ConvexShape::rectangle(1.0, f64::NAN).is_err());
        assert_eq!(Shape::new(Vec::new()), Err(ShapeError::Empty));
    }

    #[test]
    fn rotated_box_aabb_contains_corners() {
        let b = ConvexShape::Box {
            width: 2.0,
            height: 2.0,
        };
        let bb = b.aabb(&Isometry::new(Vec2::ZERO, FRAC_PI_4));
        let r = 2.0_f64.sqrt();
        assert!((bb.max().x() - r).abs() < 1e-12);
        assert!((bb.min().y() + r).abs() < 1e-12);
    }

    #[test]
    fn composite_length_accounts_for_offsets() {
        let circle = ConvexShape::Circle { radius: 1.0 };
        let shape = Shape::new([
            (Isometry::identity(), circle),
            (Isometry::from_translation(Vec2::new(3.0, 4.0)), circle),
        ]);
        let shape = match shape {
            Ok(s) => s,
            Err(e) => panic!("valid composite rejected: {e}"),
        };
        assert!((shape.characteristic_length() - 6.0).abs() < 1e-12);
        let bb = shape.aabb(&Isometry::identity());
        assert_eq!(bb.min().to_array(), [-1.0, -1.0]);
        assert_eq!(bb.max().to_array(), [4.0, 5.0]);
    }
}
