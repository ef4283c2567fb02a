//! Scalar helpers and the `euclid` aliases used across svgpath.
//!
//! Every coordinate in svgpath is an `f64`. Mixing precisions inside a single
//! evaluation changes the output of the arc conversion, so there is no `f32`
//! variant of anything in this module.

use std::f64::consts::PI;

pub use euclid;

/// A point in path coordinates.
///
/// Alias for ```euclid::default::Point2D<f64>```.
pub type Point = euclid::default::Point2D<f64>;

/// A vector in path coordinates.
///
/// Alias for ```euclid::default::Vector2D<f64>```.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for ```euclid::default::Box2D<f64>```
pub type Box2D = euclid::default::Box2D<f64>;

/// Alias for ```euclid::default::Transform2D<f64>```
pub type Transform = euclid::default::Transform2D<f64>;

/// An angle in radians.
///
/// Alias for ```euclid::Angle<f64>```
pub type Angle = euclid::Angle<f64>;

/// Tolerance used by the `approx_eq` helpers when no other value is given.
pub const EPSILON: f64 = 1e-9;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub const fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Angle { radians: value }`.
#[inline]
pub const fn radians(radians: f64) -> Angle {
    Angle { radians }
}

/// Shorthand for `Angle { radians: value * PI / 180.0 }`.
#[inline]
pub fn degrees(degrees: f64) -> Angle {
    Angle {
        radians: degrees * (PI / 180.0),
    }
}

#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

#[inline]
pub fn point_approx_eq(a: Point, b: Point, epsilon: f64) -> bool {
    approx_eq(a.x, b.x, epsilon) && approx_eq(a.y, b.y, epsilon)
}

/// Mirrors `control` through `about`, i.e. `2 * about - control`.
///
/// This is the only reflection formula used by the smooth curve commands.
#[inline]
pub fn reflect(control: Point, about: Point) -> Point {
    point(2.0 * about.x - control.x, 2.0 * about.y - control.y)
}

/// Signed angle between two unit vectors.
///
/// The inputs are radii of the same ellipse so no length normalization is
/// done. The dot product is clamped to `[-1, 1]` since rounding can push it
/// slightly out of the domain of `acos`.
pub fn unit_vector_angle(u: Vector, v: Vector) -> f64 {
    let sign = if u.cross(v) < 0.0 { -1.0 } else { 1.0 };
    let dot = u.dot(v).clamp(-1.0, 1.0);

    sign * dot.acos()
}
