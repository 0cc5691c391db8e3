//! Text strings in the built-in font.

use log::warn;

use super::{color, coord, to_pixel};
use crate::canvas::{Canvas, HEIGHT, WIDTH};
use crate::command::{Field, Fields};
use crate::glyph::{FontSize, GlyphImage};
use crate::{Color, Error, Pixel, TextMode};

/// Maximum number of characters in a text string.
pub const MAX_TEXT_LEN: usize = 49;

/// A string of supported characters, drawn left to right from `origin` (the
/// top-left corner of the first glyph).
///
/// Every glyph is followed by one column of background color, so each
/// character advances the cursor by the glyph width plus one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Text {
    letters: Field,
    size: FontSize,
    origin: (u32, u32),
    fg: Color,
    bg: Color,
}

/// Checks whether a glyph and its spacer column fit on the canvas with the
/// glyph's top-left corner at `(x, y)`.
fn fits(size: FontSize, x: usize, y: usize) -> bool {
    let right = x.checked_add(size.advance());
    let bottom = y.checked_add(size.rows());
    right.map_or(false, |r| r <= WIDTH) && bottom.map_or(false, |b| b <= HEIGHT)
}

impl Text {
    /// Validates a text string.
    ///
    /// The first glyph must always fit. In `TextMode::Atomic` the whole string
    /// must fit; in `TextMode::BestEffort` the rest is checked while drawing.
    pub fn new(
        letters: &str,
        size: FontSize,
        origin: (u32, u32),
        fg: Color,
        bg: Color,
        mode: TextMode,
    ) -> Result<Self, Error> {
        let count = letters.chars().count();
        if count > MAX_TEXT_LEN {
            return Err(Error::TextTooLong);
        }
        if let Some(c) = letters.chars().find(|&c| !font_5x7::is_supported(c)) {
            return Err(Error::UnsupportedChar(c));
        }
        let letters = Field::from(letters).map_err(|_| Error::TextTooLong)?;

        let (x, y) = (origin.0 as usize, origin.1 as usize);
        if !fits(size, x, y) {
            return Err(Error::TextOutOfBounds);
        }
        if mode == TextMode::Atomic {
            let width = count.saturating_sub(1) * size.advance();
            if !x.checked_add(width).map_or(false, |x| fits(size, x, y)) {
                return Err(Error::TextOutOfBounds);
            }
        }

        Ok(Text { letters, size, origin, fg, bg })
    }

    /// Builds text from `TEXT;<string>;{big|small};<x>;<y>;<fg>;<bg>`.
    pub fn from_fields(fields: &Fields, mode: TextMode) -> Result<Self, Error> {
        let size =
            FontSize::from_name(fields.get(2)).ok_or(Error::InvalidFontSize)?;
        let origin = (coord(fields, 3)?, coord(fields, 4)?);
        let fg = color(fields, 5)?;
        let bg = color(fields, 6)?;
        Text::new(fields.get(1), size, origin, fg, bg, mode)
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn size(&self) -> FontSize {
        self.size
    }

    pub fn origin(&self) -> (u32, u32) {
        self.origin
    }

    pub fn colors(&self) -> (Color, Color) {
        (self.fg, self.bg)
    }

    /// Draws as many characters as fit.
    ///
    /// This is not atomic. If a character would run off the right edge,
    /// drawing stops there and the characters already drawn stay drawn.
    pub fn draw<B>(&self, canvas: &mut Canvas<B>) -> super::Outcome
    where
        B: AsRef<[Pixel]> + AsMut<[Pixel]>,
    {
        let (fg, bg) = (to_pixel(self.fg), to_pixel(self.bg));
        let (mut x, y) = (self.origin.0 as usize, self.origin.1 as usize);
        let (cols, rows) = (self.size.cols(), self.size.rows());

        for (i, c) in self.letters.chars().enumerate() {
            if !fits(self.size, x, y) {
                warn!(
                    "{:?} can't fit on screen by x axis after {} characters",
                    self.letters.as_str(),
                    i
                );
                return super::Outcome::Truncated { drawn: i };
            }
            // Construction rejected characters without glyphs.
            if let Some(img) = GlyphImage::render(c, self.size, fg, bg) {
                canvas.blit((x, y), cols, img.pixels());
            }
            canvas.line((x + cols, y), (x + cols, y + rows - 1), bg);
            x += self.size.advance();
        }
        super::Outcome::Complete
    }
}
