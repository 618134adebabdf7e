use core::ops::Range;
use std::fs::File;
use std::io::Read;

use crate::cli::error::{CliError, LineCol};
use crate::input::{IStr, NL};

/// A byte offset into the loaded input.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the input position of where the given span starts.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let span = Size::usize_range(span);

    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let (line, start) = match memchr::memrchr(NL, d) {
        Some(last) => (
            memchr::memchr_iter(NL, d).count(),
            span.start.saturating_sub(last + 1),
        ),
        None => (0, span.start),
    };

    LineCol::new(line, start)
}

/// Load the input at `read_path`.
///
/// The loaded data is leaked since it's much easier to deal with than
/// lifetimes, and memory for it will be freed once the process exists
/// *anyway*.
pub fn input(path: &'static str, read_path: &str) -> Result<IStr, CliError> {
    let data = read(read_path).map_err(|error| CliError::InputUnavailable { path, error })?;

    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(CliError::EmptyInput { path });
    }

    log::debug!("{path}: loaded {} bytes", data.len());
    Ok(IStr::new(Vec::leak(data)))
}

fn read(read_path: &str) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(read_path)?;
    let mut buf = Vec::with_capacity(4096);
    file.read_to_end(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::{pos_from, Size};

    #[test]
    fn positions() {
        let data = b"1,2\n3,x\n";

        let pos = pos_from(data, Size::new(6)..Size::new(7));
        assert_eq!(pos.to_string(), "2:3");

        let pos = pos_from(data, Size::new(0)..Size::new(3));
        assert_eq!(pos.to_string(), "1:1");
    }
}
