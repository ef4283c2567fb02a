use svgpath_commands::Command;
use svgpath_core::math::Point;
use svgpath_core::Matrix;

use crate::{RenderProperties, ResolvedRenderProperties, SvgPath};

/// Receives the drawing primitives of a normalized path.
///
/// [`SvgPath::emit`] calls `move_to` and `cubic_to` once for every normalized
/// command, in order, followed by a single `close` if the path is closed.
pub trait PathSink {
    fn move_to(&mut self, to: Point);

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    fn close(&mut self);
}

/// A backend that draws paths.
///
/// `transform` is the full transform for the path (the group matrix composed
/// with the path matrix) and `properties` are already resolved against the
/// group.
pub trait Renderer {
    fn draw_path(
        &mut self,
        path: &SvgPath,
        transform: &Matrix,
        properties: &ResolvedRenderProperties,
    );
}

/// The state a group passes down to each of its paths when drawing.
#[derive(Debug, Clone, Copy)]
pub struct GroupContext<'a> {
    pub matrix: &'a Matrix,
    pub render_properties: &'a RenderProperties,
}

/// Collects the primitives back into commands, with `Z` for `close`.
impl PathSink for Vec<Command> {
    fn move_to(&mut self, to: Point) {
        self.push(Command::move_to(to));
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.push(Command::cubic_to(ctrl1, ctrl2, to));
    }

    fn close(&mut self) {
        self.push(Command::close());
    }
}
