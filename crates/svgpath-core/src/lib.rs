pub mod bound;
pub mod color;
pub mod math;
pub mod matrix;

pub use bound::Bound;
pub use matrix::{Matrix, MatrixError};
