//! Input parser.

mod error;
mod iter;

use core::mem;
use core::ops;
use std::str::from_utf8;

use arrayvec::ArrayVec;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::{InputIterator, Iter, Separated};

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The remaining data being parsed.
    data: &'static [u8],
    /// Offset of `data` in the original input.
    index: Size,
}

impl IStr {
    /// Construct a new input processor over the given data.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"1 2 3");
    /// assert_eq!(input.next::<[u32; 3]>()?, [1, 2, 3]);
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self::with_index(data, Size::ZERO)
    }

    #[inline]
    pub(crate) fn with_index(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Index of the first non-whitespace byte of the input.
    #[doc(hidden)]
    #[inline]
    pub fn word_index(&self) -> Size {
        let n = self.find(0, |b| !u8::is_ascii_whitespace(b));
        self.index.saturating_add(Size::new(n))
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Construct an iterator over values in the current input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"199\n200\n208\n");
    /// let values = input.iter::<u32>().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(values, [199, 200, 208]);
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Split the current input on the given separator, consuming it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut it = IStr::new(b"7,4,9").split(b",");
    /// assert_eq!(it.next::<u32>()?, Some(7));
    /// assert_eq!(it.next::<u32>()?, Some(4));
    /// assert_eq!(it.next::<u32>()?, Some(9));
    /// assert_eq!(it.next::<u32>()?, None);
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[inline]
    pub fn split(self, separator: &'static [u8]) -> Separated {
        Separated::new(self, separator)
    }

    /// Split on the given byte, once for every call to
    /// [`InputIterator::next`].
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> impl InputIterator + '_ {
        return Iterator { input: self, byte };

        struct Iterator<'a> {
            input: &'a mut IStr,
            byte: u8,
        }

        impl<'a> InputIterator for Iterator<'a> {
            #[inline]
            fn index(&self) -> Size {
                self.input.index
            }

            #[inline]
            fn next(&mut self) -> Option<IStr> {
                self.input.split_once(self.byte)
            }
        }
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the next
    /// line is not a valid value of type `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the next
    /// line is not a valid value of type `T`, returns `Ok(None)` if there is
    /// no more data to process.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        let Some(output) = line.try_next()? else {
            return Ok(None);
        };

        Ok(Some(output))
    }

    /// Try to parse the next whitespace-delimited word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    fn split_once_at<T>(&mut self, find: T, width: usize) -> Option<IStr>
    where
        T: FnOnce(&[u8]) -> Option<usize>,
    {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = find(self.data) else {
            let index = self.index;
            self.index = self.index.saturating_add(Size::new(self.data.len()));
            let data = mem::take(&mut self.data);
            return Some(IStr::with_index(data, index));
        };

        let data = self.data.get(..at)?;
        let index = self.index;
        self.advance(at.checked_add(width)?);
        Some(IStr::with_index(data, index))
    }

    /// Split once at the given byte or until the end of string, returning
    /// the input before the split.
    #[inline]
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        self.split_once_at(|data| memchr::memchr(b, data), 1)
    }

    /// Split once at the given separator or until the end of string.
    #[inline]
    pub(crate) fn split_once_by(&mut self, separator: &[u8]) -> Option<IStr> {
        self.split_once_at(
            |data| memchr::memmem::find(data, separator),
            separator.len(),
        )
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(Size::new(n));
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if the input has no more
    /// values to offer.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Parse something from a sequence of inputs.
pub trait FromInputIter: Sized {
    /// Parse one value from each input produced by the iterator.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next::<$first>()? else {
                    return Ok(None);
                };

                $(
                    let $rest_id = p.next::<$rest>()?;
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<$first, $($rest,)*> FromInputIter for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn from_input_iter<I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator
            {
                let Some(mut $first_id) = inputs.next() else {
                    return Ok(None);
                };

                let $first_id = <$first>::from_input(&mut $first_id)?;

                $(
                    let index = inputs.index();

                    let Some(mut $rest_id) = inputs.next() else {
                        return Err(IStrError::new(index..inputs.index(), ErrorKind::ExpectedTuple($num)));
                    };

                    let $rest_id = <$rest>::from_input(&mut $rest_id)?;
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! number {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    return Err(IStrError::new(index.saturating_add(n)..p.index, ErrorKind::NotInteger(string)));
                };

                Ok(Some(value))
            }
        }
    };
}

tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);

number!(u32);
number!(i64);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let output = *p;
        p.advance(p.data.len());
        Ok(Some(output))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(data.len());
        Ok(Some(data))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::NotUtf8
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

/// Parses exactly `N` values, returning `None` if the input has no values
/// left at all.
impl<T, const N: usize> FromInput for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let start = p.index;
        let mut output = ArrayVec::<T, N>::new();

        while !output.is_full() {
            let Some(element) = T::try_from_input(p)? else {
                break;
            };

            output.push(element);
        }

        if output.is_empty() {
            return Ok(None);
        }

        match output.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(output) => Err(IStrError::new(
                start..p.index,
                ErrorKind::BadArray(N, output.len()),
            )),
        }
    }
}

/// Split a value on the delimiter `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let it = p.splitn(D as u8);

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

/// Parse a word of input, which parses until we reach a whitespace.
pub struct W<T>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}
