use svgpath_core::{Bound, Matrix};

use crate::command::Command;

/// The axis aligned box around every point of `commands` after mapping them
/// through `matrix`.
///
/// Control points are included, so for curves this is the box of the control
/// polygon rather than the tight box of the curve. The commands are expected to
/// be normalized; every coordinate pair is read as a point.
pub fn compute_bound(commands: &[Command], matrix: &Matrix) -> Bound {
    let points = commands
        .iter()
        .flat_map(Command::points)
        .map(|p| matrix.transform_point(p));

    Bound::from_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{normalize, parse};

    fn bound_of(data: &str, matrix: &Matrix) -> Bound {
        compute_bound(&normalize(&parse(data).unwrap()), matrix)
    }

    #[test]
    fn square() {
        let bound = bound_of("M0,0 L10,0 L10,10 L0,10 Z", &Matrix::identity());
        assert_eq!(bound, Bound::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn empty_input_is_empty() {
        let bound = compute_bound(&[], &Matrix::identity());
        assert!(bound.is_empty());
        assert_eq!(bound, Bound::empty());
    }

    #[test]
    fn transformed() {
        let mut matrix = Matrix::identity();
        matrix.translate(5.0, -5.0).scale(2.0, 2.0);

        let bound = bound_of("M0,0 L10,0 L10,10 L0,10 Z", &matrix);
        assert_eq!(bound, Bound::new(5.0, -5.0, 25.0, 15.0));
    }

    #[test]
    fn includes_control_points() {
        let bound = bound_of("M0,0 C0,-10 10,-10 10,0", &Matrix::identity());
        assert_eq!(bound, Bound::new(0.0, -10.0, 10.0, 0.0));
    }

    #[test]
    fn single_point() {
        let bound = bound_of("M3,4", &Matrix::identity());
        assert_eq!(bound, Bound::new(3.0, 4.0, 3.0, 4.0));
        assert_eq!(bound.width(), 0.0);
    }
}
