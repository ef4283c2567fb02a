use std::borrow::Cow;

use svgpath_core::math::{point, reflect, vector, Point};

use crate::absolutize;
use crate::arc::arc_to_curves;
use crate::command::{Command, CommandKind};

/// Running state of [`normalize`].
#[derive(Debug, Clone, Copy)]
struct Pen {
    cursor: Point,
    subpath_start: Point,
    /// Second control point of the last cubic, or the control point of the
    /// last quadratic.
    last_control: Point,
    previous: Option<CommandKind>,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            cursor: Point::origin(),
            subpath_start: Point::origin(),
            last_control: Point::origin(),
            previous: None,
        }
    }
}

impl Pen {
    fn line_to(&mut self, to: Point, out: &mut Vec<Command>) {
        out.push(Command::from_line(self.cursor, to));
        self.cursor = to;
        self.last_control = to;
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point, out: &mut Vec<Command>) {
        out.push(Command::cubic_to(ctrl1, ctrl2, to));
        self.cursor = to;
        self.last_control = ctrl2;
    }

    fn quadratic_to(&mut self, ctrl: Point, to: Point, out: &mut Vec<Command>) {
        out.push(Command::from_quadratic(self.cursor, ctrl, to));
        self.cursor = to;
        self.last_control = ctrl;
    }

    /// The first control point of a smooth command, reflected only when the
    /// previous command was one of `chain`.
    fn smooth_control(&self, chain: [CommandKind; 2]) -> Point {
        match self.previous {
            Some(kind) if chain.contains(&kind) => reflect(self.last_control, self.cursor),
            _ => self.cursor,
        }
    }

    fn lower(&mut self, command: &Command, out: &mut Vec<Command>) {
        let c = command.coordinates();

        match command.kind() {
            CommandKind::MoveTo => {
                let to = point(c[0], c[1]);
                out.push(Command::move_to(to));
                self.cursor = to;
                self.subpath_start = to;
                self.last_control = to;
            }
            CommandKind::LineTo => self.line_to(point(c[0], c[1]), out),
            CommandKind::HorizontalLineTo => self.line_to(point(c[0], self.cursor.y), out),
            CommandKind::VerticalLineTo => self.line_to(point(self.cursor.x, c[0]), out),
            CommandKind::ClosePath => self.line_to(self.subpath_start, out),
            CommandKind::CurveTo => self.cubic_to(
                point(c[0], c[1]),
                point(c[2], c[3]),
                point(c[4], c[5]),
                out,
            ),
            CommandKind::SmoothCurveTo => {
                let ctrl1 =
                    self.smooth_control([CommandKind::CurveTo, CommandKind::SmoothCurveTo]);
                self.cubic_to(ctrl1, point(c[0], c[1]), point(c[2], c[3]), out);
            }
            CommandKind::QuadraticTo => {
                self.quadratic_to(point(c[0], c[1]), point(c[2], c[3]), out)
            }
            CommandKind::SmoothQuadraticTo => {
                let ctrl = self.smooth_control([
                    CommandKind::QuadraticTo,
                    CommandKind::SmoothQuadraticTo,
                ]);
                self.quadratic_to(ctrl, point(c[0], c[1]), out);
            }
            CommandKind::EllipticalArc => {
                let curves = arc_to_curves(
                    self.cursor,
                    point(c[5], c[6]),
                    vector(c[0], c[1]),
                    c[2],
                    c[3] != 0.0,
                    c[4] != 0.0,
                );

                // a dropped arc leaves the pen where it was
                if curves.is_empty() {
                    return;
                }

                for curve in curves {
                    self.cubic_to(curve.ctrl1, curve.ctrl2, curve.to, out);
                }
            }
        }

        self.previous = Some(command.kind());
    }
}

/// Lowers every command to either an absolute `MoveTo` or a cubic `CurveTo`.
///
/// Lines (including the implicit line of `Z`) become cubics whose first control
/// point is the start and whose second control point is the end. `S` and `T`
/// reflect the previous control point through the current point when they
/// follow a command of the same family, quadratics are raised to cubics and
/// arcs are split into segments of at most 90°. Degenerate arcs produce
/// nothing.
///
/// Relative input is absolutized first.
pub fn normalize(commands: &[Command]) -> Vec<Command> {
    let commands: Cow<[Command]> = if commands.iter().any(Command::is_relative) {
        Cow::Owned(absolutize(commands))
    } else {
        Cow::Borrowed(commands)
    };

    let mut pen = Pen::default();
    let mut out = Vec::with_capacity(commands.len());

    for command in commands.iter() {
        pen.lower(command, &mut out);
    }

    log::trace!(
        "normalized {} commands into {} move/cubic commands",
        commands.len(),
        out.len()
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use svgpath_core::math::point_approx_eq;

    fn normalized(data: &str) -> Vec<Command> {
        normalize(&parse(data).unwrap())
    }

    fn cubic(c: &[f64]) -> Command {
        Command::cubic_to((c[0], c[1]), (c[2], c[3]), (c[4], c[5]))
    }

    #[test]
    fn line_becomes_degenerate_cubic() {
        assert_eq!(
            normalized("M2,2 L8,8"),
            vec![
                Command::move_to((2.0, 2.0)),
                cubic(&[2.0, 2.0, 8.0, 8.0, 8.0, 8.0])
            ]
        );
    }

    #[test]
    fn horizontal_vertical_and_close() {
        let commands = normalized("M1,1 H5 V7 Z");
        assert_eq!(
            &commands[1..],
            &[
                cubic(&[1.0, 1.0, 5.0, 1.0, 5.0, 1.0]),
                cubic(&[5.0, 1.0, 5.0, 7.0, 5.0, 7.0]),
                cubic(&[5.0, 7.0, 1.0, 1.0, 1.0, 1.0]),
            ]
        );
    }

    #[test]
    fn only_moves_and_cubics() {
        let commands =
            normalized("M1,1 h5 v5 c1,1 2,2 3,3 s1,1 2,2 q1,0 1,1 t2,2 a5,5 0 0 1 4,4 z l1,1 m3,3 Z");

        for c in &commands {
            assert!(
                matches!(c.kind(), CommandKind::MoveTo | CommandKind::CurveTo),
                "{c}"
            );
            assert!(!c.is_relative());
            assert_eq!(c.coordinates().len(), c.kind().arity());
        }
    }

    #[test]
    fn arc_ends_on_its_target() {
        let commands = normalized("M2,5 A 5 25 0 0 1 8 8");
        assert!(commands.len() >= 2);
        assert_eq!(commands[0], Command::move_to((2.0, 5.0)));

        let end = commands.last().unwrap().end_point().unwrap();
        assert!(point_approx_eq(end, point(8.0, 8.0), 1e-9));
    }

    #[test]
    fn degenerate_arc_is_dropped() {
        let commands = normalized("M3,3 A5,5 0 0 1 3,3 L4,4");
        assert_eq!(
            commands,
            vec![
                Command::move_to((3.0, 3.0)),
                cubic(&[3.0, 3.0, 4.0, 4.0, 4.0, 4.0])
            ]
        );

        let commands = normalized("M3,3 A0,5 0 0 1 6,6");
        assert_eq!(commands, vec![Command::move_to((3.0, 3.0))]);
    }

    #[test]
    fn smooth_quadratic_reflects_previous_control() {
        let commands = normalized("M2,2 Q5,2 5,5 T8,8");
        assert_eq!(commands.len(), 3);

        // Q(5,2) reflected through (5,5) is (5,8).
        let t = Command::from_quadratic((5.0, 5.0), (5.0, 8.0), (8.0, 8.0));
        assert_eq!(commands[2], t);
        assert_eq!(commands[2].coordinates(), &[5.0, 7.0, 6.0, 8.0, 8.0, 8.0]);
    }

    #[test]
    fn smooth_quadratic_chain() {
        let commands = normalized("M0,0 Q1,1 2,0 T4,0 T6,0");
        // the control points alternate (1,1), (3,-1), (5,1)
        assert_eq!(
            commands[3],
            Command::from_quadratic((4.0, 0.0), (5.0, 1.0), (6.0, 0.0))
        );
    }

    #[test]
    fn smooth_quadratic_without_quadratic_uses_cursor() {
        let commands = normalized("M2,2 L5,5 T8,8");
        assert_eq!(
            commands[2],
            Command::from_quadratic((5.0, 5.0), (5.0, 5.0), (8.0, 8.0))
        );
    }

    #[test]
    fn smooth_cubic_reflects_previous_control() {
        let commands = normalized("M0,0 C1,2 3,4 5,5 S9,9 10,10");
        assert_eq!(commands[2], cubic(&[7.0, 6.0, 9.0, 9.0, 10.0, 10.0]));

        // S after S keeps reflecting
        let commands = normalized("M0,0 S1,1 2,2 S5,5 6,6");
        assert_eq!(commands[1], cubic(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0]));
        assert_eq!(commands[2], cubic(&[3.0, 3.0, 5.0, 5.0, 6.0, 6.0]));
    }

    #[test]
    fn smooth_cubic_after_quadratic_does_not_reflect() {
        let commands = normalized("M0,0 Q1,1 2,0 S4,4 5,5");
        assert_eq!(commands[2], cubic(&[2.0, 0.0, 4.0, 4.0, 5.0, 5.0]));
    }

    #[test]
    fn relative_input_is_absolutized() {
        assert_eq!(normalized("m2,2 l6,6"), normalized("M2,2 L8,8"));
    }

    #[test]
    fn close_returns_to_latest_move() {
        let commands = normalized("M0,0 L1,0 M5,5 L6,5 Z");
        assert_eq!(commands.last().unwrap(), &cubic(&[6.0, 5.0, 5.0, 5.0, 5.0, 5.0]));
    }
}
