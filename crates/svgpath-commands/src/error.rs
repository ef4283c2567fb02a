#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown path command `{letter}` at byte {offset}")]
    UnknownCommand { letter: char, offset: usize },

    #[error("path data must start with a command letter, found `{found}` at byte {offset}")]
    MissingCommand { found: String, offset: usize },

    #[error("command `{command}` expects a multiple of {expected} coordinates, found {found}")]
    CoordinateCount {
        command: char,
        expected: usize,
        found: usize,
    },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}
