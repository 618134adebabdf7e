use lib::prelude::*;

use super::{first_winner_score, last_winner_score, solve, Board, SIZE};
use crate::Error;

const EXAMPLE: &[u8] = b"7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

/// A board whose first row is `1..=5` and whose remaining cells count up from
/// `rest`.
fn board(rest: u32) -> Board {
    let mut numbers = [0; SIZE * SIZE];

    for (i, n) in numbers.iter_mut().enumerate() {
        *n = match i {
            0..=4 => i as u32 + 1,
            _ => rest + i as u32 - 5,
        };
    }

    Board::new(numbers)
}

#[test]
fn test_example() {
    assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (4512, 1924));
}

#[test]
fn test_first_winner_prefix() {
    let mut input = IStr::new(EXAMPLE);
    input.line::<IStr>().unwrap();
    let mut boards = input.iter::<Board>().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(boards.len(), 3);

    let calls = [7, 4, 9, 5, 11, 17, 23, 2, 0, 14, 21, 24];
    assert_eq!(first_winner_score(&calls, &mut boards).unwrap(), 188 * 24);
}

#[test]
fn test_mark_changes_one_cell() {
    let mut b = board(100);
    let before = b.unmarked().count();

    assert!(b.mark(3));
    assert_eq!(b.rows, [1, 0, 0, 0, 0]);
    assert_eq!(b.columns, [0, 0, 1, 0, 0]);
    assert_eq!(b.unmarked().count(), before - 1);

    // Marking again or marking a missing number changes nothing.
    assert!(!b.mark(3));
    assert!(!b.mark(99));
    assert_eq!(b.rows, [1, 0, 0, 0, 0]);
    assert_eq!(b.columns, [0, 0, 1, 0, 0]);
    assert_eq!(b.unmarked().count(), before - 1);
}

#[test]
fn test_wins_on_row_and_column() {
    let mut b = board(100);

    for n in 1..=4 {
        b.mark(n);
        assert!(!b.has_won());
    }

    b.mark(5);
    assert!(b.has_won());

    // First column is 1, 100, 105, 110, 115.
    let mut b = board(100);

    for n in [1, 100, 105, 110] {
        b.mark(n);
        assert!(!b.has_won());
    }

    b.mark(115);
    assert!(b.has_won());
}

#[test]
fn test_diagonal_does_not_win() {
    let mut b = board(100);

    // Main diagonal: 1, 101, 107, 113, 119.
    for n in [1, 101, 107, 113, 119] {
        assert!(b.mark(n));
    }

    assert!(!b.has_won());
}

#[test]
fn test_score_ignores_repeated_calls() {
    let mut b = board(100);
    b.mark(1);
    b.mark(100);
    let score = b.score(7);

    b.mark(1);
    b.mark(100);
    assert_eq!(b.score(7), score);
}

#[test]
fn test_simultaneous_winners() {
    let boards = vec![board(100), board(200)];
    let calls = [1, 2, 3, 4, 5];

    // Sum of 100..120 and 200..220 respectively.
    assert_eq!(first_winner_score(&calls, &mut boards.clone()).unwrap(), 2190 * 5);
    assert_eq!(last_winner_score(&calls, boards).unwrap(), 4190 * 5);
}

#[test]
fn test_won_boards_are_removed() {
    let boards = vec![board(100), Board::new(core::array::from_fn(|i| 300 + i as u32))];
    let calls = [1, 2, 3, 4, 5, 300, 301, 302, 303, 304, 100];

    // The first board wins on `5` and must not be scored again when `100` is
    // called after the second board has won.
    assert_eq!(last_winner_score(&calls, boards).unwrap(), 6290 * 304);
}

#[test]
fn test_no_winner() {
    let boards = vec![board(100)];

    assert!(matches!(
        first_winner_score(&[1, 2, 3], &mut boards.clone()),
        Err(Error::NoWinner { calls: 3 })
    ));

    assert!(matches!(
        last_winner_score(&[], boards),
        Err(Error::NoWinner { calls: 0 })
    ));
}

#[test]
fn test_partial_board() {
    let error = solve(IStr::new(b"1,2,3\n\n1 2 3 4 5\n6 7 8\n")).unwrap_err();
    assert_eq!(error.to_string(), "bad array; expected 25, but got 8");
}
