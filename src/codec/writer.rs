//! Book Writer
//!
//! Writes records to the data file, replacing its previous contents.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::Book;

use super::encode_line;

/// Writes records as lines to any sink
pub struct BookWriter<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl BookWriter<File> {
    /// Create or truncate the data file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        tracing::debug!(path = %path.display(), "opened data file for writing");
        Ok(Self::new(file))
    }
}

impl<W: Write> BookWriter<W> {
    /// Wrap any writer
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            written: 0,
        }
    }

    /// Append one record as a line
    pub fn write_book(&mut self, book: &Book) -> Result<()> {
        self.writer.write_all(encode_line(book).as_bytes())?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered lines and hand back the sink
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        let inner = self
            .writer
            .into_inner()
            .map_err(|e| e.into_error())?;
        Ok(inner)
    }
}

/// Overwrite `path` with one line per record, in order
///
/// Returns the number of lines written. A failure part-way leaves whatever
/// was already written on disk.
pub fn save_books(path: &Path, books: &[Book]) -> Result<usize> {
    let mut writer = BookWriter::create(path)?;
    for book in books {
        writer.write_book(book)?;
    }

    let count = writer.written();
    let file = writer.finish()?;
    file.sync_all()?;
    Ok(count)
}
