//! Year validation
//!
//! The upper bound is the calendar year observed the first time it is asked
//! for; it stays fixed for the rest of the process.

use std::sync::OnceLock;

use chrono::{Datelike, Local};

/// Earliest accepted publication year
pub const MIN_YEAR: i32 = 1000;

/// Calendar year captured once per process
pub fn current_year() -> i32 {
    static CURRENT_YEAR: OnceLock<i32> = OnceLock::new();
    *CURRENT_YEAR.get_or_init(|| Local::now().year())
}

/// True iff `text` is four ASCII digits between 1000 and the current year
pub fn is_valid_year(text: &str) -> bool {
    is_valid_year_at(text, current_year())
}

/// Same check as [`is_valid_year`] against an explicit upper bound
pub fn is_valid_year_at(text: &str, current_year: i32) -> bool {
    if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match text.parse::<i32>() {
        Ok(year) => (MIN_YEAR..=current_year).contains(&year),
        Err(_) => false,
    }
}

