//! Turning font glyphs into colored pixel blocks.

use font_5x7::{Bitmap, DoubledGlyph, Glyph, GLYPH_COLS, GLYPH_ROWS};

use crate::Pixel;

/// Size at which text is drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FontSize {
    /// The native 5x7 font.
    Small,
    /// The 5x7 font doubled to 10x14.
    Big,
}

impl FontSize {
    /// Looks up a size by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("small") {
            Some(FontSize::Small)
        } else if name.eq_ignore_ascii_case("big") {
            Some(FontSize::Big)
        } else {
            None
        }
    }

    /// Width of a glyph at this size.
    pub fn cols(self) -> usize {
        match self {
            FontSize::Small => Glyph::COLS,
            FontSize::Big => DoubledGlyph::COLS,
        }
    }

    /// Height of a glyph at this size.
    pub fn rows(self) -> usize {
        match self {
            FontSize::Small => Glyph::ROWS,
            FontSize::Big => DoubledGlyph::ROWS,
        }
    }

    /// Horizontal cursor movement per character: the glyph plus one column of
    /// spacing.
    pub fn advance(self) -> usize {
        self.cols() + 1
    }
}

const MAX_CELLS: usize = GLYPH_COLS * 2 * GLYPH_ROWS * 2;

/// A glyph rendered into pixels: row-major, `cols` wide, with ink in the
/// foreground color and everything else in the background color.
#[derive(Clone)]
pub struct GlyphImage {
    cells: [Pixel; MAX_CELLS],
    cols: usize,
    rows: usize,
}

impl GlyphImage {
    /// Renders `c` at `size`. Returns `None` if the font has no such character.
    pub fn render(c: char, size: FontSize, fg: Pixel, bg: Pixel) -> Option<Self> {
        let glyph = font_5x7::glyph(c)?;
        Some(match size {
            FontSize::Small => Self::colorize(glyph, fg, bg),
            FontSize::Big => Self::colorize(&glyph.doubled(), fg, bg),
        })
    }

    fn colorize<G: Bitmap>(glyph: &G, fg: Pixel, bg: Pixel) -> Self {
        let mut cells = [bg; MAX_CELLS];
        for row in 0..G::ROWS {
            for col in 0..G::COLS {
                if glyph.ink(col, row) {
                    cells[row * G::COLS + col] = fg;
                }
            }
        }
        GlyphImage {
            cells,
            cols: G::COLS,
            rows: G::ROWS,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.cells[..self.cols * self.rows]
    }
}
