//! Shared helpers for puzzle solutions.
//!
//! This provides the input parser used by every day, the command line driver
//! which loads input and prints answers, and a small benchmarking harness.

pub mod cli;
#[doc(hidden)]
pub mod env;
pub mod input;
mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, IStr, Split, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use bstr::ByteSlice;
}
