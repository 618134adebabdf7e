//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod stdout_logger;
#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use self::bencher::Bencher;
pub use self::error::{CliError, LineCol};
pub(self) use self::output::{Output, OutputKind};

use crate::input::IStr;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub(crate) enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Read input from the given path instead of the default one.
    input: Option<String>,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let args = std::env::args_os()
            .skip(1)
            .map(|arg| arg.into_string().map_err(|_| anyhow!("non-utf8 argument")))
            .collect::<Result<Vec<_>>>()?;

        let opts = Self::parse_from(args)?;

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub(crate) fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--input" => {
                    opts.input = Some(it.next().context("missing argument to `--input`")?);
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    opts.warmup = Some(warmup.parse().context("bad argument to `--warmup`")?);
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    opts.count = Some(count.parse().context("bad argument to `--count`")?);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Run a puzzle solution.
///
/// This loads input from `read_path`, or the path specified through `--input`,
/// and either prints the answers produced by `solve` or benchmarks it.
/// Errors are returned after being decorated with the input path, and the
/// position in the input if the error was raised while parsing.
pub fn run<T, A, B>(path: &'static str, read_path: &'static str, mut solve: T) -> Result<()>
where
    T: FnMut(IStr) -> Result<(A, B)>,
    A: fmt::Display,
    B: fmt::Display,
{
    let opts = Opts::parse()?;

    let (path, read_path) = match &opts.input {
        Some(input) => {
            let input: &'static str = Box::leak(input.clone().into_boxed_str());
            (input, input)
        }
        None => (path, read_path),
    };

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    let result = match crate::env::input(path, read_path) {
        Ok(input) => {
            let result = match opts.mode {
                Mode::Default => solve(input).and_then(|(part1, part2)| {
                    o.answer(&part1, &part2)?;
                    Ok(())
                }),
                Mode::Bench => Bencher::new().iter(&mut o, &opts, || solve(input)),
            };

            result.map_err(|error| error::error_context(path, input, error))
        }
        Err(error) => Err(error.into()),
    };

    if let Err(error) = result {
        if opts.json {
            o.error(format_args!("{error:#}"))?;
        }

        return Err(error);
    }

    Ok(())
}

/// A benchmark report.
#[derive(Default, Debug, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Construct a report out of sorted samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            let avg = sum.as_nanos() / (count as u128);
            Duration::from_nanos(u64::try_from(avg).unwrap_or_default())
        };

        Self {
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Get the given percentile in hundredths of a percent out of sorted samples.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples[(last * p / 10000).min(last)]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}
