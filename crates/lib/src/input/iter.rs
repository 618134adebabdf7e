use std::marker::PhantomData;

use crate::env::Size;
use crate::input::{FromInput, IStr, IStrError};

/// Iterator over inputs.
pub trait InputIterator {
    /// Current index of the input iterator.
    fn index(&self) -> Size;

    /// Get the next chunk.
    fn next(&mut self) -> Option<IStr>;
}

impl<I> InputIterator for &mut I
where
    I: InputIterator,
{
    #[inline]
    fn index(&self) -> Size {
        (**self).index()
    }

    #[inline]
    fn next(&mut self) -> Option<IStr> {
        (**self).next()
    }
}

/// Iterator over values parsed from an [IStr].
///
/// See [IStr::iter].
pub struct Iter<'a, T> {
    input: &'a mut IStr,
    _marker: PhantomData<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_next().transpose()
    }
}

/// Input split on a separator.
///
/// See [IStr::split].
pub struct Separated {
    input: IStr,
    separator: &'static [u8],
}

impl Separated {
    pub(crate) fn new(input: IStr, separator: &'static [u8]) -> Self {
        Self { input, separator }
    }

    /// Parse the next separated value, or `None` if the input is exhausted.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<Option<T>, IStrError>
    where
        T: FromInput,
    {
        let Some(mut part) = self.input.split_once_by(self.separator) else {
            return Ok(None);
        };

        Ok(Some(part.next()?))
    }
}
