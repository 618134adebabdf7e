//! Solutions to the first five puzzles of 2021.
//!
//! Each module parses its puzzle input from an [`IStr`][lib::input::IStr]
//! and exposes a `solve` function returning the answers to both parts.

pub mod bingo;
pub mod diagnostic;
pub mod dive;
pub mod error;
pub mod sonar;
pub mod vents;

pub use self::error::Error;
