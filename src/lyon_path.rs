use lyon::math;
use lyon::path::builder::{self, SvgPathBuilder};

use svgpath_core::math::Point;
use svgpath_core::Matrix;

use crate::{PathSink, SvgPath};

/// Feeds normalized commands into lyon's SVG path builder.
struct LyonSink<'a> {
    raw: builder::WithSvg<lyon::path::path::BuilderImpl>,
    transform: &'a Matrix,
}

impl LyonSink<'_> {
    fn point(&self, p: Point) -> math::Point {
        let p = self.transform.transform_point(p);
        math::Point::new(p.x as f32, p.y as f32)
    }
}

impl PathSink for LyonSink<'_> {
    fn move_to(&mut self, to: Point) {
        let to = self.point(to);
        let _ = self.raw.move_to(to);
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let (ctrl1, ctrl2, to) = (self.point(ctrl1), self.point(ctrl2), self.point(to));
        let _ = self.raw.cubic_bezier_to(ctrl1, ctrl2, to);
    }

    fn close(&mut self) {
        self.raw.close();
    }
}

/// Builds a `lyon` path from the normalized commands of `path`, mapped through
/// `transform`.
///
/// Lyon works in `f32` so coordinates are rounded on the way out.
pub fn to_lyon_path(path: &SvgPath, transform: &Matrix) -> lyon::path::Path {
    let mut sink = LyonSink {
        raw: lyon::path::Path::builder().with_svg(),
        transform,
    };

    path.emit(&mut sink);

    sink.raw.build()
}

impl SvgPath {
    /// Builds a `lyon` path in output space, using the matrix of this path.
    pub fn to_lyon_path(&self) -> lyon::path::Path {
        to_lyon_path(self, self.matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::path::PathEvent;

    #[test]
    fn closed_square() {
        let path = SvgPath::new("M0,0 L10,0 L10,10 Z").unwrap();
        let events: Vec<PathEvent> = path.to_lyon_path().iter().collect();

        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], PathEvent::Begin { at } if at == math::point(0.0, 0.0)));
        assert!(events[1..4]
            .iter()
            .all(|e| matches!(e, PathEvent::Cubic { .. })));
        assert!(matches!(events[4], PathEvent::End { close: true, .. }));
    }

    #[test]
    fn uses_transform() {
        let mut path = SvgPath::new("M1,2 L3,4").unwrap();
        path.matrix_mut().translate(10.0, 20.0);

        let events: Vec<PathEvent> = path.to_lyon_path().iter().collect();
        assert!(matches!(events[0], PathEvent::Begin { at } if at == math::point(11.0, 22.0)));
        assert!(matches!(
            events[1],
            PathEvent::Cubic { to, .. } if to == math::point(13.0, 24.0)
        ));
        assert!(matches!(events[2], PathEvent::End { close: false, .. }));

        let untransformed: Vec<PathEvent> = to_lyon_path(&path, &Matrix::identity()).iter().collect();
        assert!(matches!(untransformed[0], PathEvent::Begin { at } if at == math::point(1.0, 2.0)));
    }
}
