//! Elliptical arc to cubic Bézier conversion.
//!
//! Uses the endpoint to center parameterization from the SVG implementation
//! notes (F.6.5) and approximates every piece of at most 90° with a single
//! cubic.

use smallvec::SmallVec;
use std::f64::consts::TAU;

use svgpath_core::math::{point, unit_vector_angle, vector, Point, Vector};

/// One cubic segment of a converted arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCurve {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

/// Center parameterization of an arc.
struct ArcCenter {
    center: Point,
    theta_1: f64,
    delta_theta: f64,
}

/// Converts the arc from `from` to `to` into cubic segments.
///
/// `x_rotation` is in degrees. Radii that are too small to span the chord are
/// scaled up. An arc whose end points coincide, or that has a zero radius,
/// yields no segments at all.
///
/// The last segment ends exactly on `to`.
pub fn arc_to_curves(
    from: Point,
    to: Point,
    radii: Vector,
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
) -> SmallVec<[ArcCurve; 4]> {
    let (sin_phi, cos_phi) = (x_rotation * TAU / 360.0).sin_cos();

    // Half chord in the frame of the ellipse axes.
    let half = vector((from.x - to.x) / 2.0, (from.y - to.y) / 2.0);
    let x1p = cos_phi * half.x + sin_phi * half.y;
    let y1p = -sin_phi * half.x + cos_phi * half.y;

    if x1p == 0.0 && y1p == 0.0 {
        log::debug!("dropping arc from {from:?} to itself");
        return SmallVec::new();
    }

    if radii.x == 0.0 || radii.y == 0.0 {
        log::debug!("dropping arc from {from:?} to {to:?} with a zero radius");
        return SmallVec::new();
    }

    let mut rx = radii.x.abs();
    let mut ry = radii.y.abs();

    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        rx *= lambda.sqrt();
        ry *= lambda.sqrt();
    }

    let ArcCenter {
        center,
        mut theta_1,
        mut delta_theta,
    } = arc_center(from, to, x1p, y1p, rx, ry, sin_phi, cos_phi, large_arc, sweep);

    // Split so that every segment covers at most a quarter turn.
    let segments = (delta_theta.abs() / (TAU / 4.0)).ceil().max(1.0);
    delta_theta /= segments;

    let map = |p: Point| {
        let x = p.x * rx;
        let y = p.y * ry;
        point(
            cos_phi * x - sin_phi * y + center.x,
            sin_phi * x + cos_phi * y + center.y,
        )
    };

    let mut curves: SmallVec<[ArcCurve; 4]> = (0..segments as usize)
        .map(|_| {
            let [p0, p1, p2, p3] = approximate_unit_arc(theta_1, delta_theta);
            theta_1 += delta_theta;

            ArcCurve {
                from: map(p0),
                ctrl1: map(p1),
                ctrl2: map(p2),
                to: map(p3),
            }
        })
        .collect();

    if let Some(last) = curves.last_mut() {
        last.to = to;
    }

    curves
}

#[allow(clippy::too_many_arguments)]
fn arc_center(
    from: Point,
    to: Point,
    x1p: f64,
    y1p: f64,
    rx: f64,
    ry: f64,
    sin_phi: f64,
    cos_phi: f64,
    large_arc: bool,
    sweep: bool,
) -> ArcCenter {
    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let x1p_sq = x1p * x1p;
    let y1p_sq = y1p * y1p;

    // Rounding can make this slightly negative, e.g. -1.3877787807814457e-17.
    let mut radicand = ((rx_sq * ry_sq) - (rx_sq * y1p_sq) - (ry_sq * x1p_sq)).max(0.0);
    radicand /= (rx_sq * y1p_sq) + (ry_sq * x1p_sq);
    let radicand = radicand.sqrt() * if large_arc == sweep { -1.0 } else { 1.0 };

    let cxp = radicand * rx / ry * y1p;
    let cyp = radicand * -ry / rx * x1p;

    let center = point(
        cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0,
        sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0,
    );

    let v1 = vector((x1p - cxp) / rx, (y1p - cyp) / ry);
    let v2 = vector((-x1p - cxp) / rx, (-y1p - cyp) / ry);

    let theta_1 = unit_vector_angle(vector(1.0, 0.0), v1);
    let mut delta_theta = unit_vector_angle(v1, v2);

    if !sweep && delta_theta > 0.0 {
        delta_theta -= TAU;
    }
    if sweep && delta_theta < 0.0 {
        delta_theta += TAU;
    }

    ArcCenter {
        center,
        theta_1,
        delta_theta,
    }
}

/// Approximates the unit circle arc starting at `theta` and spanning `delta`
/// with a single cubic.
fn approximate_unit_arc(theta: f64, delta: f64) -> [Point; 4] {
    let alpha = 4.0 / 3.0 * (delta / 4.0).tan();

    let (y1, x1) = theta.sin_cos();
    let (y2, x2) = (theta + delta).sin_cos();

    [
        point(x1, y1),
        point(x1 - y1 * alpha, y1 + x1 * alpha),
        point(x2 + y2 * alpha, y2 - x2 * alpha),
        point(x2, y2),
    ]
}
