use core::fmt;
use std::io;

use thiserror::Error;

use crate::input::{IStr, IStrError};

/// Errors raised when running a puzzle.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// The input file could not be read.
    #[error("{path}: input unavailable")]
    InputUnavailable {
        path: &'static str,
        #[source]
        error: io::Error,
    },
    /// The input file has no content.
    #[error("{path}: input is empty")]
    EmptyInput { path: &'static str },
    /// A record in the input could not be parsed.
    #[error("{path}:{pos}: malformed record")]
    MalformedRecord { path: &'static str, pos: LineCol },
    #[error("{path}: failed")]
    Failed { path: &'static str },
}

/// Decorate an error raised by a solution with the path of its input, and the
/// position of the offending record if one can be found.
pub(crate) fn error_context(path: &'static str, data: IStr, error: anyhow::Error) -> anyhow::Error {
    let pos = error
        .downcast_ref::<IStrError>()
        .map(|e| crate::env::pos_from(data.as_data(), e.span.clone()));

    match pos {
        Some(pos) => error.context(CliError::MalformedRecord { path, pos }),
        None => error.context(CliError::Failed { path }),
    }
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
