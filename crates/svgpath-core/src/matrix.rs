//! A 2D affine transform.
//!
//! The matrix `[a, b, c, d, tx, ty]` maps a point with
//! `(x, y) -> (a * x + c * y + tx, b * x + d * y + ty)`.

use std::fmt;

use crate::math::{point, Point, Transform, Vector};
use crate::Bound;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    #[error("matrix is not invertible (determinant is {0})")]
    NonInvertible(f64),
}

/// An affine transform owned by a path or a group.
///
/// All the builder methods (`translate`, `rotate`, ...) compose the new
/// transform *before* the existing one, so it is applied in the local
/// coordinate system of everything already set up. This is the same order as
/// the SVG `transform` attribute and the HTML canvas API.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    raw: Transform,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self {
            raw: Transform::new(a, b, c, d, tx, ty),
        }
    }

    pub const fn from_array(m: [f64; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    pub fn to_array(&self) -> [f64; 6] {
        self.raw.to_array()
    }

    /// The underlying `euclid` transform.
    pub fn as_transform(&self) -> &Transform {
        &self.raw
    }

    pub const fn flip_horizontal() -> Self {
        Self::new(-1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub const fn flip_vertical() -> Self {
        Self::new(1.0, 0.0, 0.0, -1.0, 0.0, 0.0)
    }

    pub const fn flip_central() -> Self {
        Self::new(-1.0, 0.0, 0.0, -1.0, 0.0, 0.0)
    }

    /// Returns `a * b` without touching either operand.
    pub fn concat(a: &Matrix, b: &Matrix) -> Self {
        let mut m = *a;
        m.multiply(b);
        m
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Right-multiplies this matrix by `other` in place.
    ///
    /// Points are mapped through `other` first and then through the previous
    /// value of `self`.
    pub fn multiply(&mut self, other: &Matrix) -> &mut Self {
        self.raw = other.raw.then(&self.raw);
        self
    }

    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.multiply(&Matrix::new(1.0, 0.0, 0.0, 1.0, x, y))
    }

    /// Rotates by `degrees`. Positive angles turn the x axis toward the y axis.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        let (s, c) = degrees.to_radians().sin_cos();
        self.multiply(&Matrix::new(c, s, -s, c, 0.0, 0.0))
    }

    pub fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.multiply(&Matrix::new(x, 0.0, 0.0, y, 0.0, 0.0))
    }

    /// Skews by `degrees_x` along the x axis and `degrees_y` along the y axis.
    pub fn skew(&mut self, degrees_x: f64, degrees_y: f64) -> &mut Self {
        let tx = degrees_x.to_radians().tan();
        let ty = degrees_y.to_radians().tan();
        self.multiply(&Matrix::new(1.0, ty, tx, 1.0, 0.0, 0.0))
    }

    pub fn determinant(&self) -> f64 {
        self.raw.determinant()
    }

    pub fn is_identity(&self) -> bool {
        self.raw == Transform::identity()
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    /// Returns the inverse of this matrix.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant();
        if !self.is_invertible() {
            return Err(MatrixError::NonInvertible(det));
        }

        self.raw
            .inverse()
            .map(|raw| Matrix { raw })
            .ok_or(MatrixError::NonInvertible(det))
    }

    /// Inverts this matrix in place. The matrix is left untouched on failure.
    pub fn invert(&mut self) -> Result<&mut Self, MatrixError> {
        *self = self.inverse()?;
        Ok(self)
    }

    pub fn transform_point(&self, p: impl Into<Point>) -> Point {
        self.raw.transform_point(p.into())
    }

    /// Maps a vector, ignoring the translation part of the matrix.
    pub fn transform_vector(&self, v: impl Into<Vector>) -> Vector {
        self.raw.transform_vector(v.into())
    }

    /// Maps interleaved `x, y` pairs in place. A trailing unpaired value is left
    /// as is.
    pub fn map_coordinates(&self, coordinates: &mut [f64]) {
        for pair in coordinates.chunks_exact_mut(2) {
            let p = self.transform_point(point(pair[0], pair[1]));
            pair[0] = p.x;
            pair[1] = p.y;
        }
    }

    /// Maps the four corners of `bound` and returns the box surrounding them.
    pub fn transform_bound(&self, bound: Bound) -> Bound {
        if bound.is_empty() {
            return bound;
        }

        Bound::from_points(
            [
                point(bound.left, bound.top),
                point(bound.right, bound.top),
                point(bound.right, bound.bottom),
                point(bound.left, bound.bottom),
            ]
            .into_iter()
            .map(|p| self.transform_point(p)),
        )
    }
}

impl From<Transform> for Matrix {
    fn from(raw: Transform) -> Self {
        Self { raw }
    }
}

impl From<Matrix> for Transform {
    fn from(m: Matrix) -> Self {
        m.raw
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, tx, ty] = self.to_array();
        write!(f, "{a},{b},{c},{d},{tx},{ty}")
    }
}
