use svgpath_commands::ParseError;
use svgpath_core::MatrixError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid path data: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
