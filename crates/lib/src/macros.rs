/// Helper macro to build an input processor.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// struct Point {
///     x: u32,
///     y: u32,
/// }
///
/// lib::from_input! {
///     |W(Split((x, y))): W<Split<',', (u32, u32)>>| -> Point {
///         Ok(Point { x, y })
///     }
/// }
///
/// let mut input = IStr::new(b"3,4 10,2");
/// let a = input.next::<Point>()?;
/// let b = input.next::<Point>()?;
/// assert_eq!((a.x, a.y, b.x, b.y), (3, 4, 10, 2));
/// # Ok::<_, anyhow::Error>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = $crate::input::FromInput::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.word_index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(span, $crate::input::ErrorKind::Boxed(e.into())))
                    }
                }
            }
        }
    };
}

/// Declare the `main` function of a puzzle binary.
///
/// The first argument names the input file, which is looked up in the
/// `inputs` directory of the calling package unless `--input` is specified.
/// The second is the solve function, which receives the loaded input and
/// returns the answers to both parts.
///
/// ```ignore
/// use lib::prelude::*;
///
/// lib::entry!(input = "d01.txt", solve);
///
/// fn solve(mut input: IStr) -> Result<(u32, u32)> {
///     let n = input.next::<u32>()?;
///     Ok((n, n * 2))
/// }
/// ```
#[macro_export]
macro_rules! entry {
    (input = $path:literal, $solve:path $(,)?) => {
        fn main() -> $crate::prelude::Result<()> {
            $crate::cli::run(
                concat!("inputs/", $path),
                concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
                $solve,
            )
        }
    };
}
