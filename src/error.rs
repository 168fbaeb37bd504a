//! Error types for Bookshelf
//!
//! Provides a unified error type for all catalog operations.

use thiserror::Error;

use crate::record::Field;

/// Result type alias using LibraryError
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Unified error type for Bookshelf operations
#[derive(Debug, Error)]
pub enum LibraryError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("ID {index} does not exist (catalog holds {len} books)")]
    OutOfRange { index: usize, len: usize },

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("{skipped} line(s) of the data file could not be loaded and would be lost by saving")]
    SkippedLines { skipped: usize },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Output Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a candidate record was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields must be filled ({0} is empty)")]
    EmptyField(Field),

    #[error("Year must be 4 digits between 1000 and {current_year}, got '{year}'")]
    InvalidYear { year: String, current_year: i32 },
}
