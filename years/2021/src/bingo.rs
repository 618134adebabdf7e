//! Day 4: Giant Squid.
//!
//! Plays bingo against a set of boards, finding the boards which win first
//! and last.

#[cfg(test)]
mod tests;

use lib::prelude::*;

use crate::Error;

/// Number of rows and columns on a board.
pub const SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Open(u32),
    Marked,
}

/// A bingo board.
///
/// Keeps track of how many cells have been marked in each row and column so
/// that checking for a win doesn't have to scan the board.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    rows: [u8; SIZE],
    columns: [u8; SIZE],
}

impl Board {
    /// Construct a board out of numbers in row-major order.
    pub fn new(numbers: [u32; SIZE * SIZE]) -> Self {
        Self {
            cells: core::array::from_fn(|row| {
                core::array::from_fn(|column| Cell::Open(numbers[row * SIZE + column]))
            }),
            rows: [0; SIZE],
            columns: [0; SIZE],
        }
    }

    /// Mark the given number if it's present and not already marked.
    ///
    /// Returns `true` if a cell was marked.
    pub fn mark(&mut self, n: u32) -> bool {
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (column, cell) in cells.iter_mut().enumerate() {
                if *cell == Cell::Open(n) {
                    *cell = Cell::Marked;
                    self.rows[row] += 1;
                    self.columns[column] += 1;
                    return true;
                }
            }
        }

        false
    }

    /// Test if any row or column is fully marked.
    pub fn has_won(&self) -> bool {
        self.rows.iter().chain(&self.columns).any(|&n| usize::from(n) == SIZE)
    }

    /// Iterate over numbers which haven't been marked.
    pub fn unmarked(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flatten().filter_map(|cell| match *cell {
            Cell::Open(n) => Some(n),
            Cell::Marked => None,
        })
    }

    /// The sum of all unmarked numbers multiplied by the last called number.
    pub fn score(&self, last: u32) -> u64 {
        self.unmarked().map(u64::from).sum::<u64>() * u64::from(last)
    }
}

lib::from_input! {
    |numbers: [u32; SIZE * SIZE]| -> Board {
        Ok(Board::new(numbers))
    }
}

/// Call numbers in order against every board, returning the score of the
/// first board to win.
///
/// Boards are marked in place.
pub fn first_winner_score(calls: &[u32], boards: &mut [Board]) -> Result<u64, Error> {
    for (n, &call) in calls.iter().enumerate() {
        for (index, board) in boards.iter_mut().enumerate() {
            if board.mark(call) && board.has_won() {
                log::debug!("board {index} won first on call {n} ({call})");
                return Ok(board.score(call));
            }
        }
    }

    Err(Error::NoWinner { calls: calls.len() })
}

/// Call numbers in order against every board, removing boards as they win,
/// and return the score of the last board to win.
///
/// If several boards win on the final winning call, the one which comes last
/// in `boards` determines the score.
pub fn last_winner_score(calls: &[u32], mut boards: Vec<Board>) -> Result<u64, Error> {
    let mut last = None;

    for &call in calls {
        if boards.is_empty() {
            break;
        }

        boards.retain_mut(|board| {
            if board.mark(call) && board.has_won() {
                last = Some(board.score(call));
                return false;
            }

            true
        });
    }

    if !boards.is_empty() {
        log::debug!("{} boards never won", boards.len());
    }

    last.ok_or(Error::NoWinner { calls: calls.len() })
}

pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut calls = Vec::new();
    let mut it = input.line::<IStr>()?.split(b",");

    while let Some(n) = it.next::<u32>()? {
        calls.push(n);
    }

    let boards = input.iter::<Board>().collect::<Result<Vec<_>, _>>()?;
    log::debug!("{} calls, {} boards", calls.len(), boards.len());

    let part1 = first_winner_score(&calls, &mut boards.clone())?;
    let part2 = last_winner_score(&calls, boards)?;
    Ok((part1, part2))
}
