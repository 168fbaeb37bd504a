//! Line encoding
//!
//! One record per line. Decoding never fails hard: a bad line becomes a
//! [`SkipReason`] that the loader records and moves past.

use std::fmt;

use crate::record::{is_valid_year, Book, Field};

use super::{FIELD_COUNT, FIELD_SEPARATOR};

/// Result of decoding a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    /// Whitespace only; ignored without a warning
    Blank,

    /// A well-formed record
    Record(Book),

    /// A line that cannot become a record
    Skipped(SkipReason),
}

/// Why a line was left out of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Line did not split into exactly four fields
    Corrupted { fields: usize },

    /// Year field failed validation
    InvalidYear { year: String },

    /// A text field was blank
    EmptyField { field: Field },

    /// Line bytes are not valid UTF-8
    InvalidEncoding,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Corrupted { fields } => {
                write!(f, "corrupted line ({} fields, expected {})", fields, FIELD_COUNT)
            }
            SkipReason::InvalidYear { year } => write!(f, "invalid year '{}'", year),
            SkipReason::EmptyField { field } => write!(f, "empty {}", field),
            SkipReason::InvalidEncoding => f.write_str("not valid UTF-8"),
        }
    }
}

/// Encode a record as a line, including the trailing newline
pub fn encode_line(book: &Book) -> String {
    format!(
        "{title}{sep}{author}{sep}{year}{sep}{genre}\n",
        title = book.title,
        author = book.author,
        year = book.year,
        genre = book.genre,
        sep = FIELD_SEPARATOR,
    )
}

/// Decode one line of the data file
///
/// The line is trimmed as a whole; the fields produced by the split are kept
/// verbatim.
pub fn decode_line(raw: &str) -> DecodedLine {
    let line = raw.trim();
    if line.is_empty() {
        return DecodedLine::Blank;
    }

    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [title, author, year, genre] = parts.as_slice() else {
        return DecodedLine::Skipped(SkipReason::Corrupted {
            fields: parts.len(),
        });
    };

    if !is_valid_year(year) {
        return DecodedLine::Skipped(SkipReason::InvalidYear {
            year: year.to_string(),
        });
    }

    for (field, value) in [(Field::Title, title), (Field::Author, author), (Field::Genre, genre)] {
        if value.trim().is_empty() {
            return DecodedLine::Skipped(SkipReason::EmptyField { field });
        }
    }

    DecodedLine::Record(Book {
        title: title.to_string(),
        author: author.to_string(),
        year: year.to_string(),
        genre: genre.to_string(),
    })
}
