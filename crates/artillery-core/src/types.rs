//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A position in world space (x = downrange, y = altitude).
pub type Point = DVec2;

/// Errors raised when constructing geometry from raw extents.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("box extents must be finite: ({left}, {right}, {bottom}, {top})")]
    NonFinite {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },
    #[error("box is inverted horizontally: left {left} > right {right}")]
    InvertedHorizontal { left: f64, right: f64 },
    #[error("box is inverted vertically: bottom {bottom} > top {top}")]
    InvertedVertical { bottom: f64, top: f64 },
}

/// Axis-aligned rectangle, used for tanks and the obstacle.
///
/// Always satisfies `left <= right` and `bottom <= top`. Serialized as a
/// `[left, right, bottom, top]` array and re-validated on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64, f64, f64)", into = "(f64, f64, f64, f64)")]
pub struct Rect {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
}

impl Rect {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self, GeometryError> {
        if !(left.is_finite() && right.is_finite() && bottom.is_finite() && top.is_finite()) {
            return Err(GeometryError::NonFinite {
                left,
                right,
                bottom,
                top,
            });
        }
        if left > right {
            return Err(GeometryError::InvertedHorizontal { left, right });
        }
        if bottom > top {
            return Err(GeometryError::InvertedVertical { bottom, top });
        }
        Ok(Self {
            left,
            right,
            bottom,
            top,
        })
    }

    /// Skips validation. Only for compile-time layouts known to be well-formed.
    pub(crate) const fn from_extents_unchecked(extents: (f64, f64, f64, f64)) -> Self {
        Self {
            left: extents.0,
            right: extents.1,
            bottom: extents.2,
            top: extents.3,
        }
    }

    /// Build from a `(left, right, bottom, top)` tuple.
    pub fn from_extents(extents: (f64, f64, f64, f64)) -> Result<Self, GeometryError> {
        let (left, right, bottom, top) = extents;
        Self::new(left, right, bottom, top)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    /// Geometric center. Shots originate from the center of a tank.
    pub fn center(&self) -> Point {
        DVec2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }
}

impl TryFrom<(f64, f64, f64, f64)> for Rect {
    type Error = GeometryError;

    fn try_from(extents: (f64, f64, f64, f64)) -> Result<Self, Self::Error> {
        Self::from_extents(extents)
    }
}

impl From<Rect> for (f64, f64, f64, f64) {
    fn from(r: Rect) -> Self {
        (r.left, r.right, r.bottom, r.top)
    }
}

/// Time-ordered positions of one shot, from launch to ground impact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Launch point.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Ground impact point (or the last point before a truncation).
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Keep the first `len` points. No-op if `len` is past the end.
    pub fn truncate(&mut self, len: usize) {
        self.points.truncate(len);
    }


}
