use thiserror::Error;

use crate::vents::Point;

/// Errors raised by puzzle solutions.
///
/// Errors raised while parsing are wrapped by the input layer, which reports
/// them as malformed records together with their position.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no board won after {calls} calls")]
    NoWinner { calls: usize },
    #[error("point {point} is outside of the {size}x{size} diagram")]
    OutOfBounds { point: Point, size: usize },
    #[error("line {from} -> {to} is neither straight nor diagonal")]
    UnsupportedSlope { from: Point, to: Point },
    #[error("invalid command `{0}`")]
    UnknownCommand(Box<str>),
    #[error("`{0}` is not a binary digit")]
    NotBinary(char),
    #[error("reading has {actual} bits, but expected {expected}")]
    RaggedReport { expected: usize, actual: usize },
    #[error("diagnostic report is empty")]
    EmptyReport,
}
