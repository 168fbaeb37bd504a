//! Text Codec Module
//!
//! Persists the store to a flat, line-oriented text file and reads it back.
//!
//! ## Responsibilities
//! - Encode each record as one comma-separated line
//! - Decode lines back into records, validating field count and year
//! - Skip and report corrupted lines instead of failing the whole load
//! - Create an empty file when none exists yet
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ title,author,year,genre\n                    │  line 1 = record 0
//! ├──────────────────────────────────────────────┤
//! │ title,author,year,genre\n                    │  line 2 = record 1
//! ├──────────────────────────────────────────────┤
//! │ ...                                          │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! - Fields are joined by a single `,` in fixed order; no header, no trailer.
//! - There is no escaping. A comma inside a field produces a line that no
//!   longer splits into four fields, and Load skips it as corrupted.
//! - Blank lines are ignored on Load.
//! - A line whose bytes are not valid UTF-8 is skipped like any other
//!   corrupted line; the rest of the file still loads.

mod line;
mod loader;
mod reader;
mod writer;

pub use line::{decode_line, encode_line, DecodedLine, SkipReason};
pub use loader::{load_into, LoadReport, SkippedLine};
pub use reader::{BookReader, ReadLine};
pub use writer::{save_books, BookWriter};

/// Separator between fields on a line
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields on a well-formed line
pub const FIELD_COUNT: usize = 4;
