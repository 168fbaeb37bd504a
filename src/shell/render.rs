//! Rendering Module
//!
//! Plain-text tables for the book list and statistics screens.
//!
//! Widths are counted in terminal columns, not bytes or chars, so titles in
//! wide scripts stay aligned. Truncation cuts at the column limit without an
//! ellipsis; the stored value is never changed.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::{ListedBook, Statistics};
use crate::config::Config;

pub const ID_WIDTH: usize = 6;
pub const YEAR_WIDTH: usize = 6;
pub const COUNT_WIDTH: usize = 6;
pub const BOOK_RULE_WIDTH: usize = 80;
pub const STATS_RULE_WIDTH: usize = 40;

pub const MAIN_MENU: &str = "\n=== Greenfield Community Library System ===
1. Add Book
2. Display Books
3. Search Books
4. Statistics
5. Save File
6. Load File
7. Help
0. Exit
";

pub const DISPLAY_MENU: &str = "\n1. Search a book
2. Delete a book
0. Back to main menu
";

pub const HELP_TEXT: &str = "\n========== HELP MENU ==========
1. Add Book        - Add a new book to the list.
2. Display Books   - Show all stored books in a table.
3. Search Books    - Search by title, author, year, or genre.
4. Statistics      - View total books and genre breakdown.
5. Save File       - Save all books to the data file.
6. Load File       - Load books from the saved file.
0. Exit            - Close the program.
================================
";

/// Cut `s` to at most `max_width` columns
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Truncate then pad with spaces to exactly `width` columns
pub fn fit_to_width(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let padding = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(padding))
}

/// Book table with header and rule; one row per listed book
pub fn render_book_table(books: &[ListedBook], config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} {} GENRE\n",
        fit_to_width("ID", ID_WIDTH),
        fit_to_width("TITLE", config.title_width),
        fit_to_width("AUTHOR", config.author_width),
        fit_to_width("YEAR", YEAR_WIDTH),
    ));
    out.push_str(&"-".repeat(BOOK_RULE_WIDTH));
    out.push('\n');

    for listed in books {
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            fit_to_width(&listed.id.to_string(), ID_WIDTH),
            fit_to_width(&listed.book.title, config.title_width),
            fit_to_width(&listed.book.author, config.author_width),
            fit_to_width(&listed.book.year, YEAR_WIDTH),
            truncate_to_width(&listed.book.genre, config.genre_width),
        ));
    }

    out
}

/// Total line plus the per-genre table
pub fn render_statistics(stats: &Statistics, config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total books: {}\n", stats.total));
    out.push_str("\nBooks by Genre:\n\n");
    out.push_str(&format!(
        "{} {}\n",
        fit_to_width("GENRE", config.genre_width),
        fit_to_width("COUNT", COUNT_WIDTH),
    ));
    out.push_str(&"-".repeat(STATS_RULE_WIDTH));
    out.push('\n');

    for (genre, count) in stats.by_genre.iter() {
        out.push_str(&format!(
            "{} {}\n",
            fit_to_width(genre, config.genre_width),
            fit_to_width(&count.to_string(), COUNT_WIDTH),
        ));
    }

    out
}
