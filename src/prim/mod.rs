//! Drawing primitives.
//!
//! Each primitive type has a descriptor that can only be built from validated
//! input, so drawing one never fails: a `Text`, `Line`, or `Rect` in hand is
//! known to fit on the canvas.

pub mod line;
pub mod rect;
pub mod text;

pub use self::line::Line;
pub use self::rect::Rect;
pub use self::text::Text;

use crate::canvas::{Canvas, HEIGHT, WIDTH};
use crate::command::{Fields, Keyword};
use crate::number;
use crate::{Color, Config, Error, Pixel};

/// A validated drawing request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Primitive {
    Text(Text),
    Line(Line),
    Rect(Rect),
}

/// How much of a primitive made it onto the canvas.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Complete,
    /// Text ran into the right edge; only the first `drawn` characters were
    /// drawn.
    Truncated { drawn: usize },
}

impl Primitive {
    /// Builds the primitive named by the keyword in field 0 from the remaining
    /// fields.
    pub fn build(fields: &Fields, config: &Config) -> Result<Self, Error> {
        match Keyword::resolve(fields.get(0))? {
            Keyword::Text => {
                Text::from_fields(fields, config.text_mode).map(Primitive::Text)
            }
            Keyword::Line => Line::from_fields(fields).map(Primitive::Line),
            Keyword::Rect => Rect::from_fields(fields).map(Primitive::Rect),
            k @ (Keyword::Circle | Keyword::Pixel) => Err(Error::Unimplemented(k)),
        }
    }

    pub fn draw<B>(&self, canvas: &mut Canvas<B>) -> Outcome
    where
        B: AsRef<[Pixel]> + AsMut<[Pixel]>,
    {
        match self {
            Primitive::Text(t) => t.draw(canvas),
            Primitive::Line(l) => {
                l.draw(canvas);
                Outcome::Complete
            }
            Primitive::Rect(r) => {
                r.draw(canvas);
                Outcome::Complete
            }
        }
    }
}

/// Reads field `index` as a coordinate.
fn coord(fields: &Fields, index: usize) -> Result<u32, Error> {
    match fields.get(index) {
        "" => Err(Error::MissingField { field: index }),
        s => number::parse_coord(s).ok_or(Error::InvalidNumber { field: index }),
    }
}

/// Reads field `index` as a color.
fn color(fields: &Fields, index: usize) -> Result<Color, Error> {
    match fields.get(index) {
        "" => Err(Error::MissingField { field: index }),
        s => number::parse_color(s).ok_or(Error::InvalidNumber { field: index }),
    }
}

/// Rejects points off the canvas.
fn check_point(x: u32, y: u32) -> Result<(), Error> {
    if (x as usize) < WIDTH && (y as usize) < HEIGHT {
        Ok(())
    } else {
        Err(Error::PointOutOfBounds { x, y })
    }
}

/// Colors are carried at full width until they hit the canvas, which keeps
/// only the low 32 bits.
fn to_pixel(color: Color) -> Pixel {
    color as Pixel
}
