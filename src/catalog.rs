//! Catalog Module
//!
//! The facade that front-ends talk to.
//!
//! ## Responsibilities
//! - Own one `BookStore` and its `Config`
//! - Validate entries before they reach the store
//! - Run keyword search and statistics over the store
//! - Save and load through the text codec
//!
//! Nothing in here writes to the terminal or exits the process; every
//! operation hands a value or an error back to its caller.

use std::path::Path;

use serde::Serialize;

use crate::codec::{load_into, save_books, LoadReport};
use crate::config::Config;
use crate::error::Result;
use crate::record::Book;
use crate::store::{BookStore, GenreCounts};

/// A record paired with its identifier at the time of listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedBook {
    pub id: usize,
    #[serde(flatten)]
    pub book: Book,
}

/// Outcome of a keyword search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub keyword: String,
    pub matches: Vec<ListedBook>,
    /// Store size at the time of the search
    pub searched: usize,
}

impl SearchResult {
    /// The store had records but none matched
    pub fn is_no_match(&self) -> bool {
        self.searched > 0 && self.matches.is_empty()
    }

    /// There was nothing to search
    pub fn store_was_empty(&self) -> bool {
        self.searched == 0
    }
}

/// Totals over the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub by_genre: GenreCounts,
}

/// The book catalog
pub struct Catalog {
    /// Catalog configuration
    config: Config,

    /// Records in insertion order
    store: BookStore,
}

impl Catalog {
    /// Create an empty catalog with the given config
    ///
    /// Nothing is read from disk; call [`Catalog::load`] for that.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: BookStore::new(),
        })
    }

    /// Create an empty catalog backed by `path` (convenience method)
    pub fn with_data_file(path: &Path) -> Result<Self> {
        Self::new(Config::builder().data_file(path).build())
    }

    /// Validate and append a book
    ///
    /// On a validation error nothing is appended.
    pub fn add_book(&mut self, title: &str, author: &str, year: &str, genre: &str) -> Result<&Book> {
        let book = Book::new(title, author, year, genre)?;
        let id = self.store.append(book);
        tracing::info!(id, "book added");
        Ok(&self.store.books()[id])
    }

    /// Every record with its current identifier
    pub fn list_books(&self) -> Vec<ListedBook> {
        self.store
            .all()
            .map(|(id, book)| ListedBook {
                id,
                book: book.clone(),
            })
            .collect()
    }

    /// Case-insensitive substring search over all four fields
    ///
    /// The keyword is trimmed first; an empty keyword matches everything.
    pub fn search_books(&self, keyword: &str) -> SearchResult {
        let keyword = keyword.trim();
        let needle = keyword.to_lowercase();

        let matches = self
            .store
            .filter(|book| book.matches_keyword(&needle))
            .map(|(id, book)| ListedBook {
                id,
                book: book.clone(),
            })
            .collect();

        SearchResult {
            keyword: keyword.to_string(),
            matches,
            searched: self.store.len(),
        }
    }

    /// Remove the book with identifier `id`
    ///
    /// Every later book's identifier drops by one.
    pub fn delete_book(&mut self, id: usize) -> Result<Book> {
        let removed = self.store.remove_at(id)?;
        tracing::info!(id, title = %removed.title, "book deleted");
        Ok(removed)
    }

    /// Total count and per-genre breakdown
    pub fn statistics(&self) -> Statistics {
        Statistics {
            total: self.store.len(),
            by_genre: self.store.count_by_genre(),
        }
    }

    /// Save to the configured data file
    pub fn save(&self) -> Result<usize> {
        self.save_to(&self.config.data_file)
    }

    /// Save to `path`, overwriting it
    ///
    /// The in-memory records are untouched whether or not this succeeds.
    pub fn save_to(&self, path: &Path) -> Result<usize> {
        let written = save_books(path, self.store.books())?;
        tracing::info!(path = %path.display(), written, "catalog saved");
        Ok(written)
    }

    /// Load from the configured data file
    pub fn load(&mut self) -> Result<LoadReport> {
        let path = self.config.data_file.clone();
        self.load_from(&path)
    }

    /// Replace the in-memory records with the contents of `path`
    ///
    /// Unsaved changes are discarded without warning. See
    /// [`crate::codec::load_into`] for the missing-file and error cases.
    pub fn load_from(&mut self, path: &Path) -> Result<LoadReport> {
        load_into(path, &mut self.store)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of books
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get the underlying store
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Discard every in-memory record without touching the data file
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
