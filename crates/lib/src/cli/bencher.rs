use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::cli::{Opts, Output, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time limit in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub(crate) struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, writing a [Report] once done.
    ///
    /// The first error raised by `iter` aborts the benchmark.
    pub(crate) fn iter<T, O>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                std::hint::black_box(iter()?);
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(sample(&mut iter)?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(sample(&mut iter)?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        samples.sort();
        log::debug!("collected {} samples", samples.len());

        o.report(&Report::from_sorted(&samples))?;
        Ok(())
    }
}

#[inline]
fn sample<T, O>(iter: &mut T) -> Result<Duration>
where
    T: FnMut() -> Result<O>,
{
    let before = Instant::now();
    let value = iter()?;
    let elapsed = before.elapsed();
    std::hint::black_box(value);
    Ok(elapsed)
}
