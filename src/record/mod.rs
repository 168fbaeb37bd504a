//! Record Module
//!
//! The book record and the rules a record must satisfy before it may enter
//! the store.
//!
//! ## Responsibilities
//! - Define the flat four-field `Book` tuple
//! - Validate field presence and publication year
//! - Name the fields for error messages and display
//!
//! A record has no identity of its own: its position in the store is the only
//! identifier, and that position changes as earlier records are removed.

mod validation;

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

pub use validation::{current_year, is_valid_year, is_valid_year_at, MIN_YEAR};

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Four ASCII digits, kept as text
    pub year: String,
    pub genre: String,
}

/// The four fields of a book, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Year,
    Genre,
}

impl Field {
    /// All fields in file order
    pub const ALL: [Field; 4] = [Field::Title, Field::Author, Field::Year, Field::Genre];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Year => "year",
            Field::Genre => "genre",
        };
        f.write_str(name)
    }
}

impl Book {
    /// Validate user-supplied fields and build a record
    ///
    /// Each field is trimmed first. Presence is checked for all four fields
    /// before the year is checked, so an entry with an empty field reports the
    /// empty field even if its year is also wrong.
    pub fn new(
        title: &str,
        author: &str,
        year: &str,
        genre: &str,
    ) -> Result<Self, ValidationError> {
        let values = [title.trim(), author.trim(), year.trim(), genre.trim()];

        // Step 1: Every field must be present
        for (field, value) in Field::ALL.iter().zip(values.iter()) {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(*field));
            }
        }

        // Step 2: Year must be in range
        let [title, author, year, genre] = values;
        if !is_valid_year(year) {
            return Err(ValidationError::InvalidYear {
                year: year.to_string(),
                current_year: current_year(),
            });
        }

        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            genre: genre.to_string(),
        })
    }

    /// Value of one field
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Year => &self.year,
            Field::Genre => &self.genre,
        }
    }

    /// Case-insensitive substring match against any field
    ///
    /// `needle` must already be lowercase.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        Field::ALL
            .iter()
            .any(|field| self.field(*field).to_lowercase().contains(needle))
    }
}
