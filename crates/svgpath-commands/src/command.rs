use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use svgpath_core::math::{point, Point};
use svgpath_core::Matrix;

use crate::parse::parse_numbers;
use crate::ParseError;

/// The largest arity of any command (the elliptical arc).
const MAX_ARITY: usize = 7;

/// The coordinates of a single command. Never spills to the heap for a
/// well-formed command.
pub type Coordinates = SmallVec<[f64; MAX_ARITY]>;

/// Whether the coordinates of a command are absolute or relative to the
/// current point. Encoded in path data as upper and lower case letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Absolute,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// `M x y`
    MoveTo,
    /// `L x y`
    LineTo,
    /// `H x`
    HorizontalLineTo,
    /// `V y`
    VerticalLineTo,
    /// `C x1 y1 x2 y2 x y`
    CurveTo,
    /// `S x2 y2 x y`
    SmoothCurveTo,
    /// `Q x1 y1 x y`
    QuadraticTo,
    /// `T x y`
    SmoothQuadraticTo,
    /// `A rx ry x-axis-rotation large-arc-flag sweep-flag x y`
    EllipticalArc,
    /// `Z`
    ClosePath,
}

impl CommandKind {
    /// The number of coordinates a single command of this kind consumes.
    pub const fn arity(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo | Self::SmoothQuadraticTo => 2,
            Self::HorizontalLineTo | Self::VerticalLineTo => 1,
            Self::CurveTo => 6,
            Self::SmoothCurveTo | Self::QuadraticTo => 4,
            Self::EllipticalArc => 7,
            Self::ClosePath => 0,
        }
    }

    pub fn from_letter(letter: char) -> Option<(Self, Position)> {
        let position = if letter.is_ascii_lowercase() {
            Position::Relative
        } else {
            Position::Absolute
        };

        let kind = match letter.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'C' => Self::CurveTo,
            'S' => Self::SmoothCurveTo,
            'Q' => Self::QuadraticTo,
            'T' => Self::SmoothQuadraticTo,
            'A' => Self::EllipticalArc,
            'Z' => Self::ClosePath,
            _ => return None,
        };

        Some((kind, position))
    }

    pub const fn letter(self, position: Position) -> char {
        let upper = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CurveTo => 'C',
            Self::SmoothCurveTo => 'S',
            Self::QuadraticTo => 'Q',
            Self::SmoothQuadraticTo => 'T',
            Self::EllipticalArc => 'A',
            Self::ClosePath => 'Z',
        };

        match position {
            Position::Absolute => upper,
            Position::Relative => upper.to_ascii_lowercase(),
        }
    }
}

/// A single path instruction: a kind, its position and exactly
/// [`CommandKind::arity`] coordinates.
///
/// Deserializing goes through [`Command::try_new`], so a command with the
/// wrong number of coordinates is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCommand")
)]
pub struct Command {
    kind: CommandKind,
    position: Position,
    coordinates: Coordinates,
}

/// The unchecked shape of a serialized [`Command`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCommand {
    kind: CommandKind,
    position: Position,
    coordinates: Coordinates,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCommand> for Command {
    type Error = ParseError;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        Self::try_new(raw.kind, raw.position, raw.coordinates)
    }
}

impl Command {
    /// Creates a command, checking that the number of coordinates matches the
    /// arity of `kind`.
    pub fn try_new(
        kind: CommandKind,
        position: Position,
        coordinates: impl IntoIterator<Item = f64>,
    ) -> Result<Self, ParseError> {
        let coordinates: Coordinates = coordinates.into_iter().collect();

        if coordinates.len() != kind.arity() {
            return Err(ParseError::CoordinateCount {
                command: kind.letter(position),
                expected: kind.arity(),
                found: coordinates.len(),
            });
        }

        Ok(Self {
            kind,
            position,
            coordinates,
        })
    }

    /// Callers must uphold the arity invariant.
    pub(crate) fn new_unchecked(
        kind: CommandKind,
        position: Position,
        coordinates: Coordinates,
    ) -> Self {
        debug_assert_eq!(coordinates.len(), kind.arity());

        Self {
            kind,
            position,
            coordinates,
        }
    }

    /// Creates a command from points, each contributing an `x, y` pair.
    pub fn from_points(
        kind: CommandKind,
        position: Position,
        points: &[Point],
    ) -> Result<Self, ParseError> {
        Self::try_new(kind, position, points.iter().flat_map(|p| [p.x, p.y]))
    }

    /// An absolute `M` command.
    pub fn move_to(to: impl Into<Point>) -> Self {
        let to: Point = to.into();
        Self::new_unchecked(
            CommandKind::MoveTo,
            Position::Absolute,
            smallvec::smallvec![to.x, to.y],
        )
    }

    /// An absolute cubic `C` command.
    pub fn cubic_to(
        control_a: impl Into<Point>,
        control_b: impl Into<Point>,
        to: impl Into<Point>,
    ) -> Self {
        let a: Point = control_a.into();
        let b: Point = control_b.into();
        let to: Point = to.into();
        Self::new_unchecked(
            CommandKind::CurveTo,
            Position::Absolute,
            smallvec::smallvec![a.x, a.y, b.x, b.y, to.x, to.y],
        )
    }

    /// An absolute `Z` command.
    pub fn close() -> Self {
        Self::new_unchecked(
            CommandKind::ClosePath,
            Position::Absolute,
            Coordinates::new(),
        )
    }

    /// A straight segment expressed as a cubic: `C from to to`.
    pub fn from_line(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        let to: Point = to.into();
        Self::cubic_to(from, to, to)
    }

    /// Raises the quadratic curve `from, control, to` to an equivalent cubic.
    pub fn from_quadratic(
        from: impl Into<Point>,
        control: impl Into<Point>,
        to: impl Into<Point>,
    ) -> Self {
        let from: Point = from.into();
        let control: Point = control.into();
        let to: Point = to.into();

        Self::cubic_to(
            from + ((control - from) * (2.0 / 3.0)),
            to + ((control - to) * (2.0 / 3.0)),
            to,
        )
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_relative(&self) -> bool {
        self.position == Position::Relative
    }

    /// The letter this command is written with in path data.
    pub fn letter(&self) -> char {
        self.kind.letter(self.position)
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    pub fn into_coordinates(self) -> Coordinates {
        self.coordinates
    }

    /// The coordinates read as consecutive `x, y` pairs.
    ///
    /// This is only geometrically meaningful for commands whose arguments are
    /// all points (everything produced by [`crate::normalize`]).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.coordinates
            .chunks_exact(2)
            .map(|pair| point(pair[0], pair[1]))
    }

    /// The last `x, y` pair of the command, if it has one.
    ///
    /// `H`, `V` and `Z` need the current point to know where they end and
    /// return `None`.
    pub fn end_point(&self) -> Option<Point> {
        match self.kind {
            CommandKind::HorizontalLineTo
            | CommandKind::VerticalLineTo
            | CommandKind::ClosePath => None,
            _ => {
                let n = self.coordinates.len();
                Some(point(self.coordinates[n - 2], self.coordinates[n - 1]))
            }
        }
    }

    /// Returns the coordinates mapped through `matrix`, read as `x, y` pairs.
    pub fn transform(&self, matrix: &Matrix) -> Coordinates {
        let mut coordinates = self.coordinates.clone();
        matrix.map_coordinates(&mut coordinates);
        coordinates
    }
}

impl FromStr for Command {
    type Err = ParseError;

    /// Parses exactly one command such as `"M23.6,-12.4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();

        let Some(letter) = chars.next() else {
            return Err(ParseError::MissingCommand {
                found: String::new(),
                offset: 0,
            });
        };

        let Some((kind, position)) = CommandKind::from_letter(letter) else {
            return Err(ParseError::UnknownCommand { letter, offset: 0 });
        };

        Self::try_new(kind, position, parse_numbers(chars.as_str())?)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// The coordinates of every command, in order.
pub fn coordinates_of(commands: &[Command]) -> Vec<&[f64]> {
    commands.iter().map(Command::coordinates).collect()
}

/// Serializes commands back into path data that [`crate::parse`] reads as the
/// same sequence.
pub fn to_path_data(commands: &[Command]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
