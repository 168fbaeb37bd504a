//! Store Module
//!
//! In-memory ordered collection of book records.
//!
//! ## Responsibilities
//! - Append records in arrival order (duplicates allowed)
//! - Remove records by position
//! - Linear-scan listing and filtering
//! - Per-genre aggregation in first-occurrence order
//!
//! ## Identifiers
//! A record's identifier is its current 0-based position. Identifiers are
//! recomputed on every listing and are not stable: removing record `i` moves
//! every later record down by one.
//!
//! ## Data Structure Choice
//! A plain `Vec<Book>`: catalogs are small, every query is a linear scan, and
//! insertion order is the only ordering the catalog needs.

mod counts;
mod table;

pub use counts::GenreCounts;
pub use table::BookStore;
