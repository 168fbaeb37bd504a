//! Interactive entry
//!
//! Collects the four fields of a new book one prompt at a time. Typing the
//! cancel sentinel at any prompt abandons the whole entry, and so does end of
//! input. Either way no partial record is produced; the caller only ever sees
//! a complete [`BookEntry`] or [`Prompted::Cancelled`].

use crate::error::Result;

/// Outcome of an input step that the user may cancel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

/// Raw answers for a new book, trimmed but not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
}

pub const TITLE_PROMPT: &str = "Enter title: ";
pub const AUTHOR_PROMPT: &str = "Enter author: ";
pub const YEAR_PROMPT: &str = "Enter Publication year (YYYY): ";
pub const GENRE_PROMPT: &str = "Enter genre: ";

/// Classify one answer; `None` means input ended
pub fn classify(answer: Option<String>, sentinel: &str) -> Prompted<String> {
    match answer {
        None => Prompted::Cancelled,
        Some(text) => {
            let text = text.trim();
            if text == sentinel {
                Prompted::Cancelled
            } else {
                Prompted::Value(text.to_string())
            }
        }
    }
}

/// Ask for title, author, year and genre in order
///
/// `ask` shows a prompt and returns the user's answer, or `None` at end of
/// input. Stops at the first cancelled answer without asking the rest.
pub fn gather_entry<F>(sentinel: &str, mut ask: F) -> Result<Prompted<BookEntry>>
where
    F: FnMut(&str) -> Result<Option<String>>,
{
    let mut answer = |prompt: &str| -> Result<Option<String>> {
        match classify(ask(prompt)?, sentinel) {
            Prompted::Value(text) => Ok(Some(text)),
            Prompted::Cancelled => Ok(None),
        }
    };

    let Some(title) = answer(TITLE_PROMPT)? else {
        return Ok(Prompted::Cancelled);
    };
    let Some(author) = answer(AUTHOR_PROMPT)? else {
        return Ok(Prompted::Cancelled);
    };
    let Some(year) = answer(YEAR_PROMPT)? else {
        return Ok(Prompted::Cancelled);
    };
    let Some(genre) = answer(GENRE_PROMPT)? else {
        return Ok(Prompted::Cancelled);
    };

    Ok(Prompted::Value(BookEntry {
        title,
        author,
        year,
        genre,
    }))
}
