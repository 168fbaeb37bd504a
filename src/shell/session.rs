//! Interactive session
//!
//! Runs the menu loop over any reader/writer pair. The binary hands it
//! locked stdin/stdout; tests hand it in-memory buffers.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::catalog::Catalog;
use crate::codec::SkipReason;
use crate::error::{LibraryError, Result, ValidationError};
use crate::record::current_year;

use super::menu::{parse_book_id, DisplayChoice, ExitConfirmation, MainChoice};
use super::message::Message;
use super::prompt::{gather_entry, Prompted};
use super::render::{render_book_table, render_statistics, DISPLAY_MENU, HELP_TEXT, MAIN_MENU};

/// What the main loop should do after a screen returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One run of the interactive shell
pub struct Session<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
    use_color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
            use_color: false,
        }
    }

    /// Colour messages by level
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Show the main menu until the user confirms exit or input ends
    ///
    /// Catalog errors are reported and the loop continues; only a failure to
    /// read input or write output ends the session with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MAIN_MENU)?;
            let Some(answer) = self.ask("Enter choice: ")? else {
                tracing::debug!("input ended, leaving session");
                return Ok(());
            };

            let flow = match MainChoice::parse(&answer) {
                Some(MainChoice::Add) => self.add_book()?,
                Some(MainChoice::Display) => self.display_books()?,
                Some(MainChoice::Search) => self.search_books()?,
                Some(MainChoice::Statistics) => self.show_statistics()?,
                Some(MainChoice::Save) => self.save()?,
                Some(MainChoice::Load) => self.load()?,
                Some(MainChoice::Help) => {
                    write!(self.output, "{}", HELP_TEXT)?;
                    Flow::Continue
                }
                Some(MainChoice::Exit) => self.confirm_exit()?,
                None => {
                    self.say(Message::error("Invalid option. Please try again."))?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Consume the session, returning the catalog
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Screens
    // =========================================================================

    fn add_book(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n ========= Add a New Book =========")?;
        writeln!(
            self.output,
            "(Enter {} at any prompt to cancel and return to the main menu.)",
            self.catalog.config().cancel_sentinel
        )?;

        let sentinel = self.catalog.config().cancel_sentinel.clone();
        let entry = match gather_entry(&sentinel, |prompt| self.ask(prompt))? {
            Prompted::Value(entry) => entry,
            Prompted::Cancelled => {
                self.say(Message::info(
                    "\n Operation cancelled. Returning to main menu...\n",
                ))?;
                return Ok(Flow::Continue);
            }
        };

        let added = self
            .catalog
            .add_book(&entry.title, &entry.author, &entry.year, &entry.genre)
            .map(|_| ());
        match added {
            Ok(()) => self.say(Message::success("Book added successfully"))?,
            Err(LibraryError::Validation(ValidationError::EmptyField(_))) => {
                self.say(Message::error("Error: All fields must be filled."))?
            }
            Err(LibraryError::Validation(ValidationError::InvalidYear { .. })) => {
                self.say(Message::error(format!(
                    "Error: Year must be 4-digits and between 1000 to {}. Book not added.",
                    current_year()
                )))?
            }
            Err(e) => self.say(Message::error(format!("Error: {}", e)))?,
        }
        Ok(Flow::Continue)
    }

    fn display_books(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n ========= Book List =========\n")?;
        if self.catalog.is_empty() {
            self.say(Message::info("No books available."))?;
            return Ok(Flow::Continue);
        }

        let table = render_book_table(&self.catalog.list_books(), self.catalog.config());
        write!(self.output, "{}", table)?;
        write!(self.output, "{}", DISPLAY_MENU)?;

        let Some(answer) = self.ask("Choose an option: ")? else {
            return Ok(Flow::Continue);
        };
        match DisplayChoice::parse(&answer) {
            Some(DisplayChoice::Search) => self.search_books(),
            Some(DisplayChoice::Delete) => self.delete_book(),
            Some(DisplayChoice::Back) => Ok(Flow::Continue),
            None => {
                self.say(Message::error("Invalid option."))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn search_books(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n ========= Search Book by keyword =========\n")?;
        let Some(keyword) =
            self.ask("Enter keyword to search (title, author, year, genre): ")?
        else {
            return Ok(Flow::Continue);
        };

        let result = self.catalog.search_books(&keyword);
        writeln!(self.output, "\n ========= Search List =========\n")?;
        if result.store_was_empty() {
            self.say(Message::info("No books available."))?;
        } else if result.is_no_match() {
            self.say(Message::warning("No book found."))?;
        } else {
            let table = render_book_table(&result.matches, self.catalog.config());
            write!(self.output, "{}", table)?;
        }
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n========= Delete Book =========\n")?;
        let Some(answer) = self.ask("Enter the ID number of the book: ")? else {
            return Ok(Flow::Continue);
        };

        let Some(id) = parse_book_id(&answer) else {
            self.say(Message::error("Invalid number."))?;
            return Ok(Flow::Continue);
        };

        match self.catalog.delete_book(id) {
            Ok(removed) => {
                self.say(Message::success(format!("Book '{}' deleted.", removed.title)))?
            }
            Err(LibraryError::OutOfRange { .. }) => {
                self.say(Message::error("ID does not exist."))?
            }
            Err(e) => self.say(Message::error(format!("Error: {}", e)))?,
        }
        Ok(Flow::Continue)
    }

    fn show_statistics(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n========= Statistics =========\n")?;
        let stats = self.catalog.statistics();
        write!(
            self.output,
            "{}",
            render_statistics(&stats, self.catalog.config())
        )?;
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<Flow> {
        match self.catalog.save() {
            Ok(_) => self.say(Message::success("File saved successfully."))?,
            Err(e) => self.say(Message::error(format!("Error saving file. {}", e)))?,
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self) -> Result<Flow> {
        let report = match self.catalog.load() {
            Ok(report) => report,
            Err(e) => {
                self.say(Message::error(format!("Error loading file: {}", e)))?;
                return Ok(Flow::Continue);
            }
        };

        if report.file_created {
            self.say(Message::info("No saved file found. Empty file created."))?;
            return Ok(Flow::Continue);
        }

        for skipped in &report.skipped {
            let warning = match skipped.reason {
                SkipReason::InvalidYear { .. } => {
                    format!("Warning: Invalid year skipped -> {}", skipped.raw)
                }
                SkipReason::Corrupted { .. }
                | SkipReason::EmptyField { .. }
                | SkipReason::InvalidEncoding => {
                    format!("Warning: Skipped corrupted line -> {}", skipped.raw)
                }
            };
            self.say(Message::warning(warning))?;
        }
        self.say(Message::success("File loaded successfully."))?;
        Ok(Flow::Continue)
    }

    fn confirm_exit(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.output, "\nAre you sure you want to exit? (Y/N)")?;
            let Some(answer) = self.ask("Choice: ")? else {
                return Ok(Flow::Quit);
            };

            match ExitConfirmation::parse(&answer) {
                ExitConfirmation::Confirmed => {
                    self.say(Message::info("Goodbye."))?;
                    return Ok(Flow::Quit);
                }
                ExitConfirmation::Cancelled => {
                    self.say(Message::info("Exit cancelled. Returning to main menu..."))?;
                    return Ok(Flow::Continue);
                }
                ExitConfirmation::Invalid => {
                    self.say(Message::error("Invalid input. Please enter Y or N."))?;
                }
            }
        }
    }

    // =========================================================================
    // I/O Helpers
    // =========================================================================

    /// Show `prompt` and read one line, `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than treated as a
    /// read failure, so the answer is rejected like any other bad input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&line);
        if let Cow::Owned(_) = text {
            tracing::warn!("input line was not valid UTF-8");
        }
        Ok(Some(text.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn say(&mut self, message: Message) -> Result<()> {
        writeln!(self.output, "{}", message.paint(self.use_color))?;
        Ok(())
    }
}
