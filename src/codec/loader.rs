//! Loader
//!
//! Replaces the store's contents with the records in the data file.

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::record::Book;
use crate::store::BookStore;

use super::{BookReader, DecodedLine, SkipReason};

/// A line left out of the store during a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_number: usize,

    /// Offending line, trimmed
    pub raw: String,

    pub reason: SkipReason,
}

/// Result of a load operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// No file existed; an empty one was created and the store left untouched
    pub file_created: bool,

    /// Number of records placed in the store
    pub accepted: usize,

    /// Number of blank lines ignored
    pub blank_lines: usize,

    /// Lines that could not become records, in file order
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Number of lines skipped with a warning
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True when every non-blank line became a record
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Load `path` into `store`
///
/// If the file does not exist an empty one is created and the store is not
/// touched. Otherwise the whole file is read first; the store is replaced
/// only once reading has succeeded, so an I/O error leaves it as it was.
pub fn load_into(path: &Path, store: &mut BookStore) -> Result<LoadReport> {
    // Step 1: Missing file means there is nothing to load yet
    if !path.exists() {
        File::create(path)?;
        tracing::info!(path = %path.display(), "no saved file found, created empty file");
        return Ok(LoadReport {
            file_created: true,
            ..LoadReport::default()
        });
    }

    // Step 2: Open before touching the store
    let reader = BookReader::open(path)?;

    // Step 3: Decode every line, collecting accepted records and skips
    let mut report = LoadReport::default();
    let mut books: Vec<Book> = Vec::new();

    for line in reader {
        let line = line?;
        match line.decoded {
            DecodedLine::Blank => report.blank_lines += 1,
            DecodedLine::Record(book) => books.push(book),
            DecodedLine::Skipped(reason) => {
                tracing::warn!(
                    line = line.number,
                    raw = %line.raw,
                    "skipped line: {}",
                    reason
                );
                report.skipped.push(SkippedLine {
                    line_number: line.number,
                    raw: line.raw,
                    reason,
                });
            }
        }
    }

    // Step 4: Replace the store contents
    report.accepted = books.len();
    store.clear();
    store.extend(books);

    tracing::info!(
        path = %path.display(),
        accepted = report.accepted,
        skipped = report.skipped_count(),
        "loaded data file"
    );

    Ok(report)
}
