use std::fmt;

use crate::math::{point, Box2D, Point};

/// An axis-aligned bounding box.
///
/// `left`/`top` hold the minimum coordinates and `right`/`bottom` the maximum
/// ones. An empty bound uses `INFINITY` for the minima and `NEG_INFINITY` for
/// the maxima so that including any point makes it valid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Bound {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bound {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn empty() -> Self {
        Self::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        )
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bound = Self::empty();
        for p in points {
            bound.include_point(p);
        }
        bound
    }

    /// Returns `true` if no point has been included yet.
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.right - self.left
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.bottom - self.top
        }
    }

    pub fn center(&self) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        Some(point(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        ))
    }

    pub fn include_point(&mut self, p: Point) {
        self.left = self.left.min(p.x);
        self.right = self.right.max(p.x);
        self.top = self.top.min(p.y);
        self.bottom = self.bottom.max(p.y);
    }

    /// Returns the smallest bound containing both `self` and `other`.
    pub fn union(&self, other: &Bound) -> Bound {
        Bound {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn to_box2d(&self) -> Option<Box2D> {
        if self.is_empty() {
            return None;
        }
        Some(Box2D::new(
            point(self.left, self.top),
            point(self.right, self.bottom),
        ))
    }
}

impl From<Box2D> for Bound {
    fn from(b: Box2D) -> Self {
        Self::new(b.min.x, b.min.y, b.max.x, b.max.y)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}
