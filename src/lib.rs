//! Parse SVG path data into normalized move/cubic commands.
//!
//! ```
//! use svgpath::SvgPath;
//!
//! let mut path = SvgPath::new("M0,0 l10,0 v10 h-10 z").unwrap();
//! path.matrix_mut().scale(2.0, 2.0);
//!
//! let bound = path.bound();
//! assert_eq!((bound.right, bound.bottom), (20.0, 20.0));
//! ```

mod group;
mod path;
mod properties;
mod render;

#[cfg(feature = "lyon")]
mod lyon_path;

pub mod error;

pub use error::Error;
pub use group::SvgPathGroup;
pub use path::SvgPath;
pub use properties::{LineCap, LineJoin, RenderProperties, ResolvedRenderProperties};
pub use render::{GroupContext, PathSink, Renderer};

#[cfg(feature = "lyon")]
pub use lyon_path::to_lyon_path;

pub use svgpath_commands as commands;
pub use svgpath_commands::{
    absolutize, arc_to_curves, compute_bound, normalize, parse, to_path_data, Command,
    CommandKind, ParseError, Position,
};
pub use svgpath_core::*;
