//! Menu choices
//!
//! Parsing of the single-key answers the shell accepts. An answer that maps
//! to nothing yields `None` and the shell reports an invalid option.

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Add,
    Display,
    Search,
    Statistics,
    Save,
    Load,
    Help,
    Exit,
}

impl MainChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MainChoice::Add),
            "2" => Some(MainChoice::Display),
            "3" => Some(MainChoice::Search),
            "4" => Some(MainChoice::Statistics),
            "5" => Some(MainChoice::Save),
            "6" => Some(MainChoice::Load),
            "7" => Some(MainChoice::Help),
            "0" => Some(MainChoice::Exit),
            _ => None,
        }
    }
}

/// Entries of the menu shown under the book list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayChoice {
    Search,
    Delete,
    Back,
}

impl DisplayChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(DisplayChoice::Search),
            "2" => Some(DisplayChoice::Delete),
            "0" => Some(DisplayChoice::Back),
            _ => None,
        }
    }
}

/// Answer to "are you sure you want to exit?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitConfirmation {
    Confirmed,
    Cancelled,
    /// Neither yes nor no; ask again
    Invalid,
}

impl ExitConfirmation {
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" => ExitConfirmation::Confirmed,
            "n" => ExitConfirmation::Cancelled,
            _ => ExitConfirmation::Invalid,
        }
    }
}

/// Parse a book identifier typed by the user
///
/// Only plain ASCII digits are accepted, so signs and spaces inside the
/// number are rejected.
pub fn parse_book_id(answer: &str) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    answer.parse().ok()
}
