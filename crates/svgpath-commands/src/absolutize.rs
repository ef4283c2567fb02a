use smallvec::SmallVec;
use svgpath_core::math::{point, Point};

use crate::command::{Command, CommandKind, Position};

/// The pen state threaded through [`absolutize`].
#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
    current: Point,
    subpath_start: Point,
}

impl Cursor {
    fn offset(&self, kind: CommandKind, coordinates: &mut [f64]) {
        match kind {
            // only the end point of an arc is relative
            CommandKind::EllipticalArc => {
                coordinates[5] += self.current.x;
                coordinates[6] += self.current.y;
            }
            CommandKind::HorizontalLineTo => coordinates[0] += self.current.x,
            CommandKind::VerticalLineTo => coordinates[0] += self.current.y,
            _ => {
                for pair in coordinates.chunks_exact_mut(2) {
                    pair[0] += self.current.x;
                    pair[1] += self.current.y;
                }
            }
        }
    }

    fn advance(&mut self, command: &Command) {
        let c = command.coordinates();

        match command.kind() {
            CommandKind::ClosePath => self.current = self.subpath_start,
            CommandKind::HorizontalLineTo => self.current.x = c[0],
            CommandKind::VerticalLineTo => self.current.y = c[0],
            CommandKind::MoveTo => {
                self.current = point(c[0], c[1]);
                self.subpath_start = self.current;
            }
            _ => {
                if let Some(end) = command.end_point() {
                    self.current = end;
                }
            }
        }
    }
}

/// Converts relative commands to absolute ones.
///
/// The input is never modified. Commands that are already absolute are copied
/// as they are, so running this on its own output changes nothing.
pub fn absolutize(commands: &[Command]) -> Vec<Command> {
    let mut cursor = Cursor::default();

    commands
        .iter()
        .map(|command| {
            let mut coordinates = SmallVec::from_slice(command.coordinates());
            if command.is_relative() {
                cursor.offset(command.kind(), &mut coordinates);
            }

            let absolute = Command::new_unchecked(command.kind(), Position::Absolute, coordinates);
            cursor.advance(&absolute);
            absolute
        })
        .collect()
}
