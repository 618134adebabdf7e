//! Day 2: Dive!

use lib::prelude::*;

use crate::Error;

/// A single course command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

lib::from_input! {
    |value: (W<&'static str>, i64)| -> Command {
        let (W(command), n) = value;

        Ok(match command {
            "forward" => Command::Forward(n),
            "down" => Command::Down(n),
            "up" => Command::Up(n),
            other => return Err(Error::UnknownCommand(other.into()).into()),
        })
    }
}

/// Position of the submarine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
    aim: i64,
}

impl Position {
    /// Apply a command where `up` and `down` change depth directly.
    pub fn steer(&mut self, command: Command) {
        match command {
            Command::Forward(n) => self.horizontal += n,
            Command::Down(n) => self.depth += n,
            Command::Up(n) => self.depth -= n,
        }
    }

    /// Apply a command where `up` and `down` change the aim, and moving
    /// forward changes depth by the current aim.
    pub fn steer_with_aim(&mut self, command: Command) {
        match command {
            Command::Forward(n) => {
                self.horizontal += n;
                self.depth += self.aim * n;
            }
            Command::Down(n) => self.aim += n,
            Command::Up(n) => self.aim -= n,
        }
    }

    /// The product of horizontal position and depth.
    pub fn product(&self) -> i64 {
        self.horizontal * self.depth
    }
}

pub fn solve(mut input: IStr) -> Result<(i64, i64)> {
    let mut part1 = Position::default();
    let mut part2 = Position::default();

    for command in input.iter::<Command>() {
        let command = command?;
        part1.steer(command);
        part2.steer_with_aim(command);
    }

    Ok((part1.product(), part2.product()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u8] = b"forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    #[test]
    fn test_example() {
        assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (150, 900));
    }

    #[test]
    fn test_steer() {
        let mut p = Position::default();
        p.steer(Command::Down(4));
        p.steer(Command::Up(1));
        p.steer(Command::Forward(2));
        assert_eq!((p.horizontal, p.depth), (2, 3));

        let mut p = Position::default();
        p.steer_with_aim(Command::Down(4));
        p.steer_with_aim(Command::Forward(2));
        assert_eq!((p.horizontal, p.depth), (2, 8));
    }

    #[test]
    fn test_unknown_command() {
        let error = solve(IStr::new(b"forward 5\nbackward 2\n")).unwrap_err();
        assert_eq!(error.to_string(), "invalid command `backward`");
    }
}
