//! Horizontal and vertical lines.

use gfx::Direction;

use super::{check_point, color, coord, to_pixel};
use crate::canvas::Canvas;
use crate::command::Fields;
use crate::{Color, Error, Pixel};

/// An axis-aligned line between two on-canvas points, inclusive.
///
/// The endpoints are kept in the order given; drawing does not care.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Line {
    start: (u32, u32),
    end: (u32, u32),
    color: Color,
    direction: Direction,
}

impl Line {
    /// Validates a line from `start` to `end`.
    pub fn new(
        start: (u32, u32),
        end: (u32, u32),
        color: Color,
    ) -> Result<Self, Error> {
        let direction = Direction::between(
            start.0 as usize,
            start.1 as usize,
            end.0 as usize,
            end.1 as usize,
        )
        .ok_or(Error::DiagonalLine)?;
        check_point(start.0, start.1)?;
        check_point(end.0, end.1)?;
        Ok(Line { start, end, color, direction })
    }

    /// Builds a line from `LINE;<x0>;<y0>;<x1>;<y1>;<color>`.
    pub fn from_fields(fields: &Fields) -> Result<Self, Error> {
        let start = (coord(fields, 1)?, coord(fields, 2)?);
        let end = (coord(fields, 3)?, coord(fields, 4)?);
        let color = color(fields, 5)?;
        Line::new(start, end, color)
    }

    /// Skips validation, for edges of a rectangle that has already been
    /// checked.
    pub(super) fn edge(
        start: (u32, u32),
        end: (u32, u32),
        color: Color,
        direction: Direction,
    ) -> Self {
        Line { start, end, color, direction }
    }

    pub fn start(&self) -> (u32, u32) {
        self.start
    }

    pub fn end(&self) -> (u32, u32) {
        self.end
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_horizontal(&self) -> bool {
        self.direction == Direction::Horizontal
    }

    pub fn draw<B>(&self, canvas: &mut Canvas<B>)
    where
        B: AsRef<[Pixel]> + AsMut<[Pixel]>,
    {
        canvas.line(
            (self.start.0 as usize, self.start.1 as usize),
            (self.end.0 as usize, self.end.1 as usize),
            to_pixel(self.color),
        )
    }
}
