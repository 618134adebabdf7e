//! Day 5: Hydrothermal Venture.
//!
//! Draws lines of vents onto a diagram and counts the points where lines
//! overlap. Straight and diagonal lines are drawn in separate passes over the
//! same diagram so that the second part can build on the first.


use core::fmt;

use lib::prelude::*;

use crate::Error;

/// Width and height of the diagram used for puzzle input.
pub const DIAGRAM_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

lib::from_input! {
    |W(Split((x, y))): W<Split<',', (u32, u32)>>| -> Point {
        Ok(Point { x, y })
    }
}

/// The `->` separating the two ends of a line.
struct Arrow;

lib::from_input! {
    |W(arrow): W<&'static str>| -> Arrow {
        ensure!(arrow == "->", "expected `->`, but got `{arrow}`");
        Ok(Arrow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    /// Also used for lines which cover a single point.
    Vertical,
    /// `y` increases as `x` increases.
    Ascending,
    /// `y` decreases as `x` increases.
    Descending,
}

impl Orientation {
    pub fn is_straight(self) -> bool {
        matches!(self, Orientation::Horizontal | Orientation::Vertical)
    }

    pub fn is_diagonal(self) -> bool {
        !self.is_straight()
    }
}

/// A line of vents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VentLine {
    start: Point,
    end: Point,
    orientation: Orientation,
}

impl VentLine {
    /// Construct a line between two points.
    ///
    /// Lines are normalized so that they run from lower to higher `x`, or
    /// from lower to higher `y` for vertical lines. Lines which aren't
    /// horizontal, vertical or at exactly 45 degrees are rejected.
    pub fn new(a: Point, b: Point) -> Result<Self, Error> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let orientation = if start.x == end.x {
            Orientation::Vertical
        } else if start.y == end.y {
            Orientation::Horizontal
        } else if end.x - start.x == end.y.abs_diff(start.y) {
            if end.y > start.y {
                Orientation::Ascending
            } else {
                Orientation::Descending
            }
        } else {
            return Err(Error::UnsupportedSlope { from: a, to: b });
        };

        Ok(Self {
            start,
            end,
            orientation,
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterate over every point covered by the line, from start to end.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let Self {
            start,
            end,
            orientation,
        } = *self;

        let steps = match orientation {
            Orientation::Vertical => end.y - start.y,
            _ => end.x - start.x,
        };

        (0..=steps).map(move |n| match orientation {
            Orientation::Horizontal => Point::new(start.x + n, start.y),
            Orientation::Vertical => Point::new(start.x, start.y + n),
            Orientation::Ascending => Point::new(start.x + n, start.y + n),
            Orientation::Descending => Point::new(start.x + n, start.y - n),
        })
    }
}

lib::from_input! {
    |value: (Point, Arrow, Point)| -> VentLine {
        let (a, Arrow, b) = value;
        Ok(VentLine::new(a, b)?)
    }
}

/// A square grid counting how many lines cover each point.
#[derive(Debug, Clone)]
pub struct Diagram {
    size: usize,
    counts: Vec<u32>,
}

impl Diagram {
    /// Construct an empty diagram of the given width and height.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            counts: vec![0; size * size],
        }
    }

    /// Get the number of lines covering the given point, or `None` if the
    /// point is out of bounds.
    pub fn get(&self, point: Point) -> Option<u32> {
        self.counts.get(self.index(point)?).copied()
    }

    /// Draw a line onto the diagram.
    ///
    /// Fails without touching the diagram if any part of the line is out of
    /// bounds.
    pub fn draw(&mut self, line: &VentLine) -> Result<(), Error> {
        // Every point lies within the box spanned by the ends of the line.
        for point in [line.start, line.end] {
            self.checked_index(point)?;
        }

        for point in line.points() {
            let index = self.checked_index(point)?;
            self.counts[index] += 1;
        }

        Ok(())
    }

    /// Count the points covered by at least two lines.
    pub fn count_overlaps(&self) -> usize {
        self.counts.iter().filter(|&&n| n >= 2).count()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;

        if x >= self.size || y >= self.size {
            return None;
        }

        Some(y * self.size + x)
    }

    fn checked_index(&self, point: Point) -> Result<usize, Error> {
        self.index(point).ok_or(Error::OutOfBounds {
            point,
            size: self.size,
        })
    }
}

/// Draw all horizontal and vertical lines.
pub fn draw_straight_lines(lines: &[VentLine], diagram: &mut Diagram) -> Result<(), Error> {
    draw_where(lines, diagram, Orientation::is_straight)
}

/// Draw all diagonal lines.
pub fn draw_diagonal_lines(lines: &[VentLine], diagram: &mut Diagram) -> Result<(), Error> {
    draw_where(lines, diagram, Orientation::is_diagonal)
}

fn draw_where(
    lines: &[VentLine],
    diagram: &mut Diagram,
    filter: fn(Orientation) -> bool,
) -> Result<(), Error> {
    for line in lines.iter().filter(|line| filter(line.orientation)) {
        diagram.draw(line)?;
    }

    Ok(())
}

pub fn solve(mut input: IStr) -> Result<(usize, usize)> {
    let lines = input.iter::<VentLine>().collect::<Result<Vec<_>, _>>()?;
    log::debug!("{} lines", lines.len());

    let mut diagram = Diagram::new(DIAGRAM_SIZE);

    draw_straight_lines(&lines, &mut diagram)?;
    let part1 = diagram.count_overlaps();

    draw_diagonal_lines(&lines, &mut diagram)?;
    let part2 = diagram.count_overlaps();

    Ok((part1, part2))
}
