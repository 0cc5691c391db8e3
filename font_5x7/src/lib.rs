//! 5x7 monochrome bitmap font.
//!
//! The font covers upper and lower case Latin letters, space, and the four
//! punctuation marks `,` `.` `?` `!`. Anything else has no glyph; callers are
//! expected to check `is_supported` before asking for one.
//!
//! Each glyph row is stored in the low five bits of a byte, with bit 4 being
//! the leftmost column. A set bit is *ink* (foreground); a clear bit is
//! background.
//!
//! There is no separate large font. `Glyph::doubled` produces a 10x14 glyph by
//! replicating every cell into a 2x2 block.

#![no_std]

/// Width of a glyph cell, in pixels.
pub const GLYPH_COLS: usize = 5;
/// Height of a glyph cell, in pixels.
pub const GLYPH_ROWS: usize = 7;

/// Number of characters in the font.
pub const FONT_CHARS: usize = 57;

/// Read access to a monochrome grid of cells.
pub trait Bitmap {
    /// Width in cells.
    const COLS: usize;
    /// Height in cells.
    const ROWS: usize;

    /// Checks whether the cell at (`col`, `row`) is ink.
    ///
    /// # Panics
    ///
    /// If `col` or `row` is outside the bitmap.
    fn ink(&self, col: usize, row: usize) -> bool;
}

/// A single 5x7 glyph.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    pub const fn new(rows: [u8; GLYPH_ROWS]) -> Self {
        Glyph { rows }
    }

    pub fn rows(&self) -> &[u8; GLYPH_ROWS] {
        &self.rows
    }

    /// Scales this glyph up by two in each direction using nearest-neighbor
    /// sampling.
    pub fn doubled(&self) -> DoubledGlyph {
        let mut rows = [0; GLYPH_ROWS * 2];
        for (i, &bits) in self.rows.iter().enumerate() {
            let mut wide = 0u16;
            // Bit `b` of the small row becomes bits `2b` and `2b+1`.
            for b in 0..GLYPH_COLS {
                if bits & (1 << b) != 0 {
                    wide |= 0b11 << (b * 2);
                }
            }
            rows[2 * i] = wide;
            rows[2 * i + 1] = wide;
        }
        DoubledGlyph { rows }
    }
}

impl Bitmap for Glyph {
    const COLS: usize = GLYPH_COLS;
    const ROWS: usize = GLYPH_ROWS;

    fn ink(&self, col: usize, row: usize) -> bool {
        assert!(col < GLYPH_COLS);
        self.rows[row] & (1 << (GLYPH_COLS - 1 - col)) != 0
    }
}

/// A 10x14 glyph produced by `Glyph::doubled`. Rows use the same MSB-left
/// convention, in the low ten bits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DoubledGlyph {
    rows: [u16; GLYPH_ROWS * 2],
}

impl Bitmap for DoubledGlyph {
    const COLS: usize = GLYPH_COLS * 2;
    const ROWS: usize = GLYPH_ROWS * 2;

    fn ink(&self, col: usize, row: usize) -> bool {
        assert!(col < Self::COLS);
        self.rows[row] & (1 << (Self::COLS - 1 - col)) != 0
    }
}

/// Checks whether `c` has a glyph in this font.
pub fn is_supported(c: char) -> bool {
    index_of(c).is_some()
}

/// Looks up the glyph for `c`, if the font has one.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    index_of(c).map(|i| &FONT[i].1)
}

/// Position of `c` in `FONT`. Letters are laid out alphabetically, upper case
/// first, so they can be found by arithmetic.
fn index_of(c: char) -> Option<usize> {
    match c {
        'A'..='Z' => Some(c as usize - 'A' as usize),
        'a'..='z' => Some(26 + c as usize - 'a' as usize),
        ',' => Some(52),
        '.' => Some(53),
        ' ' => Some(54),
        '?' => Some(55),
        '!' => Some(56),
        _ => None,
    }
}

/// The font itself, keyed by character.
pub static FONT: [(char, Glyph); FONT_CHARS] = [
    ('A', Glyph::new([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('B', Glyph::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110])),
    ('C', Glyph::new([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('D', Glyph::new([0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100])),
    ('E', Glyph::new([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111])),
    ('F', Glyph::new([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('G', Glyph::new([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111])),
    ('H', Glyph::new([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('I', Glyph::new([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('J', Glyph::new([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100])),
    ('K', Glyph::new([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001])),
    ('L', Glyph::new([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', Glyph::new([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001])),
    ('N', Glyph::new([0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001])),
    ('O', Glyph::new([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('P', Glyph::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('Q', Glyph::new([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101])),
    ('R', Glyph::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
    ('S', Glyph::new([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('T', Glyph::new([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', Glyph::new([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('V', Glyph::new([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('W', Glyph::new([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010])),
    ('X', Glyph::new([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001])),
    ('Y', Glyph::new([0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100])),
    ('Z', Glyph::new([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111])),
    ('a', Glyph::new([0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111])),
    ('b', Glyph::new([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110])),
    ('c', Glyph::new([0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('d', Glyph::new([0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111])),
    ('e', Glyph::new([0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110])),
    ('f', Glyph::new([0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000])),
    ('g', Glyph::new([0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110])),
    ('h', Glyph::new([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001])),
    ('i', Glyph::new([0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('j', Glyph::new([0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100])),
    ('k', Glyph::new([0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010])),
    ('l', Glyph::new([0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('m', Glyph::new([0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001])),
    ('n', Glyph::new([0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001])),
    ('o', Glyph::new([0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('p', Glyph::new([0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000])),
    ('q', Glyph::new([0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001])),
    ('r', Glyph::new([0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000])),
    ('s', Glyph::new([0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110])),
    ('t', Glyph::new([0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110])),
    ('u', Glyph::new([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101])),
    ('v', Glyph::new([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('w', Glyph::new([0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010])),
    ('x', Glyph::new([0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001])),
    ('y', Glyph::new([0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110])),
    ('z', Glyph::new([0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111])),
    (',', Glyph::new([0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000])),
    ('.', Glyph::new([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100])),
    (' ', Glyph::new([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('?', Glyph::new([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100])),
    ('!', Glyph::new([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100])),
];
