//! Rectangles, outlined or solid.

use gfx::Direction;

use super::{check_point, color, coord, to_pixel, Line};
use crate::canvas::Canvas;
use crate::command::Fields;
use crate::{Color, Error, Pixel};

/// A closed rectangle between `top_left` and `bottom_right`, both on the
/// canvas, with `top_left` no further right or down than `bottom_right`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rect {
    top_left: (u32, u32),
    bottom_right: (u32, u32),
    color: Color,
    fill: bool,
}

impl Rect {
    pub fn new(
        top_left: (u32, u32),
        bottom_right: (u32, u32),
        color: Color,
        fill: bool,
    ) -> Result<Self, Error> {
        if top_left.0 > bottom_right.0 || top_left.1 > bottom_right.1 {
            return Err(Error::InvertedRect);
        }
        check_point(top_left.0, top_left.1)?;
        check_point(bottom_right.0, bottom_right.1)?;
        Ok(Rect { top_left, bottom_right, color, fill })
    }

    /// Builds a rectangle from `RECT;<x0>;<y0>;<x1>;<y1>;<color>;{fill|no}`.
    pub fn from_fields(fields: &Fields) -> Result<Self, Error> {
        let top_left = (coord(fields, 1)?, coord(fields, 2)?);
        let bottom_right = (coord(fields, 3)?, coord(fields, 4)?);
        let color = color(fields, 5)?;
        let fill = match fields.get(6) {
            f if f.eq_ignore_ascii_case("fill") => true,
            f if f.eq_ignore_ascii_case("no") => false,
            _ => return Err(Error::InvalidFillMode),
        };
        Rect::new(top_left, bottom_right, color, fill)
    }

    pub fn top_left(&self) -> (u32, u32) {
        self.top_left
    }

    pub fn bottom_right(&self) -> (u32, u32) {
        self.bottom_right
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_filled(&self) -> bool {
        self.fill
    }

    /// The four sides of the outline: top, left, bottom, right.
    pub fn edges(&self) -> [Line; 4] {
        let (l, t) = self.top_left;
        let (r, b) = self.bottom_right;
        let c = self.color;
        [
            Line::edge((l, t), (r, t), c, Direction::Horizontal),
            Line::edge((l, t), (l, b), c, Direction::Vertical),
            Line::edge((l, b), (r, b), c, Direction::Horizontal),
            Line::edge((r, t), (r, b), c, Direction::Vertical),
        ]
    }

    pub fn draw<B>(&self, canvas: &mut Canvas<B>)
    where
        B: AsRef<[Pixel]> + AsMut<[Pixel]>,
    {
        if self.fill {
            canvas.fill(
                (self.top_left.0 as usize, self.top_left.1 as usize),
                (self.bottom_right.0 as usize, self.bottom_right.1 as usize),
                to_pixel(self.color),
            )
        } else {
            for edge in &self.edges() {
                edge.draw(canvas);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{PIXELS, WIDTH};
    use crate::command::parse;

    fn build(cmd: &str) -> Result<Rect, Error> {
        Rect::from_fields(&parse(cmd).unwrap())
    }

    fn painted(c: &Canvas<Vec<Pixel>>) -> Vec<(usize, usize)> {
        c.pixels()
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != 0)
            .map(|(i, _)| (i % WIDTH, i / WIDTH))
            .collect()
    }

    #[test]
    fn fill_flag() {
        assert!(build("RECT;0;0;9;9;1;fill").unwrap().is_filled());
        assert!(build("RECT;0;0;9;9;1;FILL").unwrap().is_filled());
        assert!(!build("RECT;0;0;9;9;1;no").unwrap().is_filled());
        assert!(!build("RECT;0;0;9;9;1;No").unwrap().is_filled());
        assert_eq!(build("RECT;0;0;9;9;1;yes"), Err(Error::InvalidFillMode));
        assert_eq!(build("RECT;0;0;9;9;1"), Err(Error::InvalidFillMode));
    }

    #[test]
    fn corner_order() {
        assert_eq!(build("RECT;9;0;0;9;1;no"), Err(Error::InvertedRect));
        assert_eq!(build("RECT;0;9;9;0;1;fill"), Err(Error::InvertedRect));
        assert!(build("RECT;4;4;4;4;1;fill").is_ok());
    }

    #[test]
    fn off_canvas() {
        assert_eq!(
            build("RECT;600;400;640;479;1;fill"),
            Err(Error::PointOutOfBounds { x: 640, y: 479 })
        );
    }

    #[test]
    fn bad_numbers() {
        assert_eq!(
            build("RECT;0;0;9;9;;fill"),
            Err(Error::MissingField { field: 5 })
        );
        assert_eq!(
            build("RECT;0;0;nine;9;1;fill"),
            Err(Error::InvalidNumber { field: 3 })
        );
    }

    #[test]
    fn outline_is_perimeter() {
        let mut c = Canvas::new(vec![0; PIXELS]);
        build("RECT;2;3;11;12;0x00FF00;no").unwrap().draw(&mut c);
        let px = painted(&c);
        assert_eq!(px.len(), 36);
        for (x, y) in px {
            assert!(x == 2 || x == 11 || y == 3 || y == 12, "({}, {})", x, y);
            assert!((2..=11).contains(&x) && (3..=12).contains(&y));
        }
    }

    #[test]
    fn outline_matches_edges() {
        let r = build("RECT;10;20;30;25;7;no").unwrap();
        let mut by_rect = Canvas::new(vec![0; PIXELS]);
        r.draw(&mut by_rect);
        let mut by_lines = Canvas::new(vec![0; PIXELS]);
        for e in &r.edges() {
            e.draw(&mut by_lines);
        }
        assert_eq!(by_rect.pixels(), by_lines.pixels());
    }

    #[test]
    fn degenerate_outline() {
        let mut c = Canvas::new(vec![0; PIXELS]);
        build("RECT;5;5;5;5;1;no").unwrap().draw(&mut c);
        assert_eq!(painted(&c), vec![(5, 5)]);
    }
}
