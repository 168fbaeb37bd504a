//! Shell Module
//!
//! Terminal front-end for the catalog: menus, prompts, tables, messages.
//!
//! ## Responsibilities
//! - Drive the menu loop one selection at a time
//! - Turn the cancel sentinel into an explicit `Prompted::Cancelled`
//! - Turn exit confirmation into a three-state answer
//! - Render books and statistics as fixed-width tables
//!
//! The shell never terminates the process. `Session::run` returns once the
//! user confirms exit and the binary decides what to do next.

mod menu;
mod message;
mod prompt;
mod render;
mod session;

pub use menu::{parse_book_id, DisplayChoice, ExitConfirmation, MainChoice};
pub use message::{Message, MessageLevel};
pub use prompt::{classify, gather_entry, BookEntry, Prompted};
pub use render::{fit_to_width, render_book_table, render_statistics, truncate_to_width};
pub use session::Session;
