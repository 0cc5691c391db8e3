//! Splitting raw command lines into fields, and recognizing the command
//! keyword.
//!
//! A command is one line of text: up to `MAX_FIELDS` fields separated by `;`,
//! ended by a newline or by the end of the input.
//!
//! ```text
//! TEXT;<string>;{big|small};<x>;<y>;<fg>;<bg>
//! LINE;<x0>;<y0>;<x1>;<y1>;<color>
//! RECT;<x0>;<y0>;<x1>;<y1>;<color>;{fill|no}
//! ```
//!
//! The parser only splits. It does not know how many fields each command
//! wants; a short command simply has fewer fields, and asking for one that is
//! not there gets an empty string.

use arrayvec::{ArrayString, ArrayVec};

use crate::Error;

/// Maximum number of fields in a command, keyword included. Anything after the
/// last one is ignored.
pub const MAX_FIELDS: usize = 7;

/// Maximum length of a single field, in bytes.
pub const MAX_FIELD_LEN: usize = 50;

/// One field of a command.
pub type Field = ArrayString<MAX_FIELD_LEN>;

/// The fields of one command, in order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fields(ArrayVec<Field, MAX_FIELDS>);

impl Fields {
    /// Returns field `index`, or an empty string if the command didn't have
    /// that many fields.
    pub fn get(&self, index: usize) -> &str {
        self.0.get(index).map_or("", |f| f.as_str())
    }

    /// Number of fields actually present in the command.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.as_str())
    }
}

/// Splits `line` into fields.
///
/// Parsing stops at the first newline. Fields past `MAX_FIELDS` are dropped
/// without complaint. The only failure is a field that won't fit in a `Field`.
pub fn parse(line: &str) -> Result<Fields, Error> {
    let line = match line.find('\n') {
        Some(end) => &line[..end],
        None => line,
    };

    let mut fields = ArrayVec::new();
    for (i, text) in line.split(';').take(MAX_FIELDS).enumerate() {
        let field =
            Field::from(text).map_err(|_| Error::FieldTooLong { field: i })?;
        fields.push(field);
    }
    Ok(Fields(fields))
}

/// Command selected by the first field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Keyword {
    Text,
    Line,
    Rect,
    /// Reserved; recognized so it can be refused by name.
    Circle,
    /// Reserved; recognized so it can be refused by name.
    Pixel,
}

impl Keyword {
    /// Looks up a keyword, ignoring ASCII case.
    pub fn resolve(word: &str) -> Result<Self, Error> {
        const TABLE: [(&str, Keyword); 5] = [
            ("TEXT", Keyword::Text),
            ("LINE", Keyword::Line),
            ("RECT", Keyword::Rect),
            ("CIRC", Keyword::Circle),
            ("PIX", Keyword::Pixel),
        ];

        TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(word))
            .map(|&(_, k)| k)
            .ok_or_else(|| {
                // The word came out of a Field, but callers may hand us
                // anything; keep what fits for the diagnostic.
                let mut shown = Field::new();
                for c in word.chars() {
                    if shown.try_push(c).is_err() {
                        break;
                    }
                }
                Error::UnknownCommand(shown)
            })
    }
}
