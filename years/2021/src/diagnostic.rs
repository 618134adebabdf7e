//! Day 3: Binary Diagnostic.

use lib::prelude::*;

use crate::Error;

/// A single binary reading of the diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    bits: u32,
    width: usize,
}

lib::from_input! {
    |W(digits): W<&'static [u8]>| -> Reading {
        ensure!(digits.len() <= 32, "reading `{}` is wider than 32 bits", digits.as_bstr());

        let mut bits = 0u32;

        for &d in digits {
            let bit = match d {
                b'0' => 0,
                b'1' => 1,
                other => return Err(Error::NotBinary(char::from(other)).into()),
            };

            bits = (bits << 1) | bit;
        }

        Ok(Reading { bits, width: digits.len() })
    }
}

/// A diagnostic report of equal-width readings.
#[derive(Debug, Clone)]
pub struct Report {
    readings: Vec<u32>,
    width: usize,
}

impl Report {
    /// Construct a report, making sure that every reading has the same width.
    pub fn new<I>(readings: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Reading>,
    {
        let mut it = readings.into_iter();
        let first = it.next().ok_or(Error::EmptyReport)?;
        let mut readings = vec![first.bits];

        for reading in it {
            if reading.width != first.width {
                return Err(Error::RaggedReport {
                    expected: first.width,
                    actual: reading.width,
                });
            }

            readings.push(reading.bits);
        }

        Ok(Self {
            readings,
            width: first.width,
        })
    }

    /// Gamma rate, built out of the most common bit in every position.
    ///
    /// Positions where both bits are equally common count as `1`.
    pub fn gamma(&self) -> u32 {
        let mut gamma = 0;

        for bit in 0..self.width {
            if ones(&self.readings, bit) * 2 >= self.readings.len() {
                gamma |= 1 << bit;
            }
        }

        gamma
    }

    /// Epsilon rate, built out of the least common bit in every position.
    pub fn epsilon(&self) -> u32 {
        !self.gamma() & self.mask()
    }

    pub fn power_consumption(&self) -> u64 {
        u64::from(self.gamma()) * u64::from(self.epsilon())
    }

    /// Oxygen generator rating, which keeps readings with the most common
    /// bit, preferring `1` on ties.
    pub fn oxygen_rating(&self) -> u32 {
        self.rating(|ones, zeros| ones >= zeros)
    }

    /// CO2 scrubber rating, which keeps readings with the least common bit,
    /// preferring `0` on ties.
    pub fn co2_rating(&self) -> u32 {
        self.rating(|ones, zeros| ones < zeros)
    }

    pub fn life_support_rating(&self) -> u64 {
        u64::from(self.oxygen_rating()) * u64::from(self.co2_rating())
    }

    /// Filter readings from the most significant bit down until one remains.
    fn rating(&self, keep_ones: fn(usize, usize) -> bool) -> u32 {
        let mut remaining = self.readings.clone();

        for bit in (0..self.width).rev() {
            if remaining.len() == 1 {
                break;
            }

            let ones = ones(&remaining, bit);
            let zeros = remaining.len() - ones;

            // Nothing to pick between.
            if ones == 0 || zeros == 0 {
                continue;
            }

            let keep = u32::from(keep_ones(ones, zeros));
            remaining.retain(|&r| (r >> bit) & 1 == keep);
        }

        // Never empty since the report isn't and both bit values are present
        // whenever we filter.
        remaining[0]
    }

    fn mask(&self) -> u32 {
        match self.width {
            32 => u32::MAX,
            width => (1 << width) - 1,
        }
    }
}

/// Count readings with the given bit set.
fn ones(readings: &[u32], bit: usize) -> usize {
    readings.iter().filter(|&&r| (r >> bit) & 1 == 1).count()
}

pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let readings = input.iter::<Reading>().collect::<Result<Vec<_>, _>>()?;
    let report = Report::new(readings)?;

    log::debug!(
        "gamma: {}, epsilon: {}, oxygen: {}, co2: {}",
        report.gamma(),
        report.epsilon(),
        report.oxygen_rating(),
        report.co2_rating()
    );

    Ok((report.power_consumption(), report.life_support_rating()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u8] = b"00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";

    fn report(input: &'static [u8]) -> Report {
        let readings = IStr::new(input)
            .iter::<Reading>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        Report::new(readings).unwrap()
    }

    #[test]
    fn test_example() {
        let report = report(EXAMPLE);
        assert_eq!(report.gamma(), 22);
        assert_eq!(report.epsilon(), 9);
        assert_eq!(report.oxygen_rating(), 23);
        assert_eq!(report.co2_rating(), 10);
        assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (198, 230));
    }

    #[test]
    fn test_duplicate_readings() {
        let report = report(b"101\n101\n");
        assert_eq!(report.oxygen_rating(), 0b101);
        assert_eq!(report.co2_rating(), 0b101);
    }

    #[test]
    fn test_bad_reports() {
        assert!(matches!(Report::new(Vec::<Reading>::new()), Err(Error::EmptyReport)));

        let error = solve(IStr::new(b"0101\n011\n")).unwrap_err();
        assert_eq!(error.to_string(), "reading has 3 bits, but expected 4");

        let error = solve(IStr::new(b"0101\n0121\n")).unwrap_err();
        assert_eq!(error.to_string(), "`2` is not a binary digit");
    }
}
