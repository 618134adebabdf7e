//! Day 1: Sonar Sweep.

use lib::prelude::*;

/// Count the number of measurements larger than the previous one.
pub fn count_increases(depths: &[u32]) -> usize {
    depths.windows(2).filter(|w| w[0] < w[1]).count()
}

/// Count the number of three-measurement windows whose sum is larger than
/// the previous window.
///
/// Two neighbouring windows share their middle measurements, so only the
/// first element of one and the last element of the other are compared.
pub fn count_window_increases(depths: &[u32]) -> usize {
    depths.windows(4).filter(|w| w[0] < w[3]).count()
}

pub fn solve(mut input: IStr) -> Result<(usize, usize)> {
    let depths = input.iter::<u32>().collect::<Result<Vec<_>, _>>()?;
    log::debug!("{} depth measurements", depths.len());
    Ok((count_increases(&depths), count_window_increases(&depths)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPTHS: [u32; 10] = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];

    #[test]
    fn test_example() {
        assert_eq!(count_increases(&DEPTHS), 7);
        assert_eq!(count_window_increases(&DEPTHS), 5);
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(count_increases(&[]), 0);
        assert_eq!(count_increases(&[1]), 0);
        assert_eq!(count_window_increases(&[1, 2, 3]), 0);
        assert_eq!(count_window_increases(&[1, 2, 3, 4]), 1);
    }

    #[test]
    fn test_solve() {
        let input = IStr::new(b"199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n");
        assert_eq!(solve(input).unwrap(), (7, 5));
    }
}
