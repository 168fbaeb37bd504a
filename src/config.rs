//! Configuration for Bookshelf
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{LibraryError, Result};

/// Main configuration for a Bookshelf catalog
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Flat text file used by Save and Load
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Interactive Entry Configuration
    // -------------------------------------------------------------------------
    /// Answer that aborts an entry sequence at any prompt
    pub cancel_sentinel: String,

    // -------------------------------------------------------------------------
    // Display Configuration
    // -------------------------------------------------------------------------
    /// Display columns for the title column
    pub title_width: usize,

    /// Display columns for the author column
    pub author_width: usize,

    /// Display columns for genre names in both tables
    pub genre_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("library_books.txt"),
            cancel_sentinel: "0".to_string(),
            title_width: 30,
            author_width: 20,
            genre_width: 30,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check settings that would make the catalog unusable
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(LibraryError::Config("data file path is empty".to_string()));
        }
        if self.cancel_sentinel.trim().is_empty() {
            return Err(LibraryError::Config(
                "cancel sentinel must not be blank".to_string(),
            ));
        }
        if self.title_width == 0 || self.author_width == 0 || self.genre_width == 0 {
            return Err(LibraryError::Config(
                "column widths must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file used by Save and Load
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the answer that cancels an entry sequence
    pub fn cancel_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.config.cancel_sentinel = sentinel.into();
        self
    }

    /// Set the title column width
    pub fn title_width(mut self, width: usize) -> Self {
        self.config.title_width = width;
        self
    }

    /// Set the author column width
    pub fn author_width(mut self, width: usize) -> Self {
        self.config.author_width = width;
        self
    }

    /// Set the genre column width
    pub fn genre_width(mut self, width: usize) -> Self {
        self.config.genre_width = width;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
