//! The one failure type of the command pipeline.

use core::fmt;

use crate::command::{Field, Keyword, MAX_FIELD_LEN};
use crate::prim::text::MAX_TEXT_LEN;

/// Reasons a command can be rejected.
///
/// Every variant means the command was discarded *before* any pixel was
/// written. Running off the right edge partway through a text string is not an
/// error; see `Outcome::Truncated`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The raw command was longer than the write path accepts.
    CommandTooLong,
    /// The raw command was not valid UTF-8.
    NotText,
    /// A field exceeded `MAX_FIELD_LEN` bytes. `field` is its index.
    FieldTooLong { field: usize },
    /// The first field did not name a command.
    UnknownCommand(Field),
    /// The command is reserved but has no rasterizer.
    Unimplemented(Keyword),
    /// A field the command needs was empty or absent.
    MissingField { field: usize },
    /// A coordinate or color field was not a valid number, or overflowed.
    InvalidNumber { field: usize },
    /// The font size field was neither `big` nor `small`.
    InvalidFontSize,
    /// The fill field was neither `fill` nor `no`.
    InvalidFillMode,
    /// The text contains a character with no glyph.
    UnsupportedChar(char),
    /// The text is longer than `MAX_TEXT_LEN` characters.
    TextTooLong,
    /// The text does not fit on the canvas from its origin.
    TextOutOfBounds,
    /// A line or rectangle corner lies outside the canvas.
    PointOutOfBounds { x: u32, y: u32 },
    /// The line is neither horizontal nor vertical.
    DiagonalLine,
    /// The rectangle's first corner is below or right of its second.
    InvertedRect,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CommandTooLong => write!(f, "command too long"),
            Error::NotText => write!(f, "command is not valid text"),
            Error::FieldTooLong { field } => {
                write!(f, "field {} exceeds {} bytes", field, MAX_FIELD_LEN)
            }
            Error::UnknownCommand(word) => {
                write!(f, "{:?} is not an appropriate command", word.as_str())
            }
            Error::Unimplemented(k) => write!(f, "{:?} is not implemented", k),
            Error::MissingField { field } => write!(f, "field {} is missing", field),
            Error::InvalidNumber { field } => {
                write!(f, "field {} is not a valid number", field)
            }
            Error::InvalidFontSize => write!(f, "font size must be big or small"),
            Error::InvalidFillMode => write!(f, "fill mode must be fill or no"),
            Error::UnsupportedChar(c) => {
                write!(f, "{:?} can't be printed, it is not in the font", c)
            }
            Error::TextTooLong => {
                write!(f, "text longer than {} characters", MAX_TEXT_LEN)
            }
            Error::TextOutOfBounds => {
                write!(f, "text can't fit on screen by one or both axes")
            }
            Error::PointOutOfBounds { x, y } => {
                write!(f, "point ({}, {}) is off screen", x, y)
            }
            Error::DiagonalLine => {
                write!(f, "line is neither horizontal nor vertical")
            }
            Error::InvertedRect => {
                write!(f, "rectangle corners are not top-left, bottom-right")
            }
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(test, feature = "std"))] {
        impl std::error::Error for Error {}
    }
}
