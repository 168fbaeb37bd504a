//! # Bookshelf
//!
//! A small, single-user book catalog with:
//! - An ordered in-memory record store
//! - Validated entry (non-empty fields, 4-digit year up to the current year)
//! - Keyword search and per-genre statistics
//! - Flat comma-separated text persistence with skip-on-corruption loading
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Shell (menu loop)  /  One-shot CLI              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Catalog                               │
//! │          (validation, search, statistics, save/load)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  BookStore  │          │ Text Codec  │
//!   │   (Vec)     │◄─────────│ (line file) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod codec;
pub mod catalog;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LibraryError, Result, ValidationError};
pub use config::Config;
pub use catalog::{Catalog, ListedBook, SearchResult, Statistics};
pub use record::Book;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookshelf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
