//! BookStore implementation
//!
//! Vec-backed ordered store.

use crate::error::{LibraryError, Result};
use crate::record::Book;

use super::GenreCounts;

/// Ordered in-memory collection of books
#[derive(Debug, Default, Clone)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Append a record at the end, returns its identifier
    pub fn append(&mut self, book: Book) -> usize {
        self.books.push(book);
        let id = self.books.len() - 1;
        tracing::debug!(id, "appended book");
        id
    }

    /// Remove the record at `index`, shifting later records down by one
    pub fn remove_at(&mut self, index: usize) -> Result<Book> {
        if index >= self.books.len() {
            return Err(LibraryError::OutOfRange {
                index,
                len: self.books.len(),
            });
        }

        let removed = self.books.remove(index);
        tracing::debug!(index, remaining = self.books.len(), "removed book");
        Ok(removed)
    }

    /// Record at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// All records paired with their current identifiers
    pub fn all(&self) -> impl Iterator<Item = (usize, &Book)> + '_ {
        self.books.iter().enumerate()
    }

    /// Records satisfying `predicate`, paired with their current identifiers
    ///
    /// Lazy: nothing is scanned until the iterator is consumed.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = (usize, &'a Book)> + 'a
    where
        P: FnMut(&Book) -> bool + 'a,
    {
        self.all().filter(move |(_, book)| predicate(*book))
    }

    /// Number of records per genre, keys in first-occurrence order
    pub fn count_by_genre(&self) -> GenreCounts {
        let mut counts = GenreCounts::new();
        for book in &self.books {
            counts.increment(&book.genre);
        }
        counts
    }

    /// Remove every record
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.books.len(), "cleared store");
        self.books.clear();
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Records in store order
    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl Extend<Book> for BookStore {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        self.books.extend(iter);
    }
}
