//! Book Reader
//!
//! Reads and decodes the data file one line at a time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

use super::{decode_line, DecodedLine, SkipReason};

/// One decoded line together with its position and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadLine {
    /// 1-based line number in the file
    pub number: usize,

    /// Line text with surrounding whitespace removed
    pub raw: String,

    pub decoded: DecodedLine,
}

/// Reads records from a line-oriented source
pub struct BookReader<R> {
    reader: R,
    line_number: usize,
    buffer: Vec<u8>,
}

impl BookReader<BufReader<File>> {
    /// Open the data file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "opened data file for reading");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> BookReader<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Read and decode the next line, `None` at end of input
    ///
    /// A line that is not valid UTF-8 is returned as skipped, with its text
    /// decoded lossily for the report. Only I/O failures are errors.
    pub fn next_line(&mut self) -> Result<Option<ReadLine>> {
        self.buffer.clear();
        let bytes = self.reader.read_until(b'\n', &mut self.buffer)?;
        if bytes == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        let line = match std::str::from_utf8(&self.buffer) {
            Ok(text) => ReadLine {
                number: self.line_number,
                raw: text.trim().to_string(),
                decoded: decode_line(text),
            },
            Err(_) => ReadLine {
                number: self.line_number,
                raw: String::from_utf8_lossy(&self.buffer).trim().to_string(),
                decoded: DecodedLine::Skipped(SkipReason::InvalidEncoding),
            },
        };
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for BookReader<R> {
    type Item = Result<ReadLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
