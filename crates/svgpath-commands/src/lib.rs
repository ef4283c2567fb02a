//! The path data pipeline: `parse` -> `absolutize` -> `normalize`.
//!
//! Each stage is a pure function over a slice of [`Command`]s and can be
//! called on its own. The output of [`normalize`] only contains `MoveTo` and
//! cubic `CurveTo` commands.

mod absolutize;
mod arc;
mod bounds;
mod command;
mod error;
mod normalize;
mod parse;

pub use absolutize::absolutize;
pub use arc::{arc_to_curves, ArcCurve};
pub use bounds::compute_bound;
pub use command::{coordinates_of, to_path_data, Command, CommandKind, Coordinates, Position};
pub use error::ParseError;
pub use normalize::normalize;
pub use parse::{parse, parse_numbers};
