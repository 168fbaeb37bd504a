//! Catalog Tests
//!
//! Tests verify:
//! - Add with validation and list in insertion order
//! - Search semantics (case, substring, empty keyword, empty store)
//! - Delete with identifier shifting
//! - Statistics ordering
//! - Save/load through the configured data file
//! - Config validation

use std::fs;

use bookshelf::error::{LibraryError, ValidationError};
use bookshelf::record::Field;
use bookshelf::{Catalog, Config};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn create_test_catalog() -> (Catalog, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::with_data_file(&temp_dir.path().join("library_books.txt")).unwrap();
    (catalog, temp_dir)
}

fn sample_catalog() -> (Catalog, TempDir) {
    let (mut catalog, temp_dir) = create_test_catalog();
    catalog
        .add_book("The Hobbit", "J.R.R. Tolkien", "1937", "Fantasy")
        .unwrap();
    catalog
        .add_book("Dune", "Frank Herbert", "1965", "SciFi")
        .unwrap();
    catalog
        .add_book("Foundation", "Isaac Asimov", "1951", "SciFi")
        .unwrap();
    (catalog, temp_dir)
}

fn listed_titles(catalog: &Catalog) -> Vec<String> {
    catalog
        .list_books()
        .into_iter()
        .map(|l| l.book.title)
        .collect()
}

// =============================================================================
// Add / List Tests
// =============================================================================

#[test]
fn test_new_catalog_is_empty() {
    let (catalog, _dir) = create_test_catalog();

    assert!(catalog.is_empty());
    assert!(catalog.list_books().is_empty());
}

#[test]
fn test_add_then_list() {
    let (mut catalog, _dir) = create_test_catalog();

    let added = catalog.add_book("Dune", "Frank Herbert", "1965", "SciFi").unwrap();
    assert_eq!(added.title, "Dune");

    let listed = catalog.list_books();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, 0);
    assert_eq!(listed[0].book.author, "Frank Herbert");
}

#[test]
fn test_list_in_insertion_order() {
    let (catalog, _dir) = sample_catalog();

    let listed = catalog.list_books();
    let ids: Vec<usize> = listed.iter().map(|l| l.id).collect();

    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(listed_titles(&catalog), vec!["The Hobbit", "Dune", "Foundation"]);
}

#[test]
fn test_add_trims_input() {
    let (mut catalog, _dir) = create_test_catalog();

    catalog.add_book("  Emma ", "Jane Austen  ", " 1815", "Romance ").unwrap();

    let book = catalog.store().get(0).unwrap();
    assert_eq!(book.title, "Emma");
    assert_eq!(book.year, "1815");
    assert_eq!(book.genre, "Romance");
}

#[test]
fn test_add_rejects_empty_field_without_appending() {
    let (mut catalog, _dir) = sample_catalog();

    let err = catalog.add_book("Title", "", "2000", "Drama").unwrap_err();

    assert!(matches!(
        err,
        LibraryError::Validation(ValidationError::EmptyField(Field::Author))
    ));
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_add_rejects_bad_year_without_appending() {
    let (mut catalog, _dir) = sample_catalog();

    for year in ["999", "20244", "abcd", "0999"] {
        let err = catalog.add_book("Title", "Author", year, "Drama").unwrap_err();
        assert!(
            matches!(err, LibraryError::Validation(ValidationError::InvalidYear { .. })),
            "year {:?} gave {:?}",
            year,
            err
        );
    }

    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_add_allows_duplicates() {
    let (mut catalog, _dir) = create_test_catalog();

    catalog.add_book("Same", "Author", "2000", "Drama").unwrap();
    catalog.add_book("Same", "Author", "2000", "Drama").unwrap();

    assert_eq!(catalog.len(), 2);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_is_case_insensitive() {
    let (catalog, _dir) = sample_catalog();

    let result = catalog.search_books("DUNE");

    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].id, 1);
}

#[test]
fn test_search_partial_match_across_fields() {
    let (catalog, _dir) = sample_catalog();

    // "sci" only appears in the genre
    let result = catalog.search_books("sci");
    let ids: Vec<usize> = result.matches.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2]);

    // "asim" only appears in an author
    let result = catalog.search_books("asim");
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].book.title, "Foundation");
}

#[test]
fn test_search_matches_year_text() {
    let (catalog, _dir) = sample_catalog();

    let result = catalog.search_books("19");
    assert_eq!(result.matches.len(), 3);

    let result = catalog.search_books("1965");
    assert_eq!(result.matches.len(), 1);
}

#[test]
fn test_search_empty_keyword_matches_everything() {
    let (catalog, _dir) = sample_catalog();

    assert_eq!(catalog.search_books("").matches.len(), 3);
    assert_eq!(catalog.search_books("   ").matches.len(), 3);
}

#[test]
fn test_search_keyword_is_trimmed() {
    let (catalog, _dir) = sample_catalog();

    let result = catalog.search_books("  dune  ");

    assert_eq!(result.keyword, "dune");
    assert_eq!(result.matches.len(), 1);
}

#[test]
fn test_search_no_match_differs_from_empty_store() {
    let (catalog, _dir) = sample_catalog();
    let result = catalog.search_books("zzz");
    assert!(result.is_no_match());
    assert!(!result.store_was_empty());

    let (empty, _dir2) = create_test_catalog();
    let result = empty.search_books("zzz");
    assert!(result.store_was_empty());
    assert!(!result.is_no_match());
}

#[test]
fn test_search_does_not_change_catalog() {
    let (catalog, _dir) = sample_catalog();

    catalog.search_books("dune");

    assert_eq!(catalog.len(), 3);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_shifts_identifiers() {
    let (mut catalog, _dir) = sample_catalog();

    let removed = catalog.delete_book(0).unwrap();
    assert_eq!(removed.title, "The Hobbit");

    let listed = catalog.list_books();
    assert_eq!(listed[0].id, 0);
    assert_eq!(listed[0].book.title, "Dune");
    assert_eq!(listed[1].id, 1);
    assert_eq!(listed[1].book.title, "Foundation");
}

#[test]
fn test_delete_out_of_range() {
    let (mut catalog, _dir) = sample_catalog();

    let err = catalog.delete_book(3).unwrap_err();

    assert!(matches!(err, LibraryError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_delete_from_empty_catalog() {
    let (mut catalog, _dir) = create_test_catalog();
    assert!(catalog.delete_book(0).is_err());
}

// =============================================================================
// Statistics Tests
// =============================================================================

#[test]
fn test_statistics_empty() {
    let (catalog, _dir) = create_test_catalog();

    let stats = catalog.statistics();

    assert_eq!(stats.total, 0);
    assert!(stats.by_genre.is_empty());
}

#[test]
fn test_statistics_first_occurrence_order() {
    let (catalog, _dir) = sample_catalog();

    let stats = catalog.statistics();
    let entries: Vec<(&str, usize)> = stats.by_genre.iter().collect();

    assert_eq!(stats.total, 3);
    assert_eq!(entries, vec![("Fantasy", 1), ("SciFi", 2)]);
}

#[test]
fn test_statistics_follow_deletes() {
    let (mut catalog, _dir) = sample_catalog();

    catalog.delete_book(0).unwrap();
    let stats = catalog.statistics();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.by_genre.get("Fantasy"), None);
    assert_eq!(stats.by_genre.get("SciFi"), Some(2));
}

#[test]
fn test_statistics_serialize_as_map() {
    let (catalog, _dir) = sample_catalog();

    let json = serde_json::to_value(catalog.statistics()).unwrap();

    assert_eq!(json["total"], 3);
    assert_eq!(json["by_genre"]["SciFi"], 2);
    assert_eq!(json["by_genre"]["Fantasy"], 1);
}

#[test]
fn test_listed_book_serializes_flat() {
    let (catalog, _dir) = sample_catalog();

    let json = serde_json::to_value(&catalog.list_books()[1]).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["year"], "1965");
}

// =============================================================================
// Save / Load Tests
// =============================================================================

#[test]
fn test_save_clear_load_round_trip() {
    let (mut catalog, _dir) = sample_catalog();

    assert_eq!(catalog.save().unwrap(), 3);
    catalog.clear();
    assert!(catalog.is_empty());

    let report = catalog.load().unwrap();

    assert!(report.is_clean());
    assert_eq!(report.accepted, 3);
    assert_eq!(listed_titles(&catalog), vec!["The Hobbit", "Dune", "Foundation"]);
}

#[test]
fn test_save_writes_configured_file() {
    let (catalog, dir) = sample_catalog();

    catalog.save().unwrap();

    let contents = fs::read_to_string(dir.path().join("library_books.txt")).unwrap();
    assert_eq!(
        contents,
        "The Hobbit,J.R.R. Tolkien,1937,Fantasy\nDune,Frank Herbert,1965,SciFi\nFoundation,Isaac Asimov,1951,SciFi\n"
    );
}

#[test]
fn test_load_discards_unsaved_changes() {
    let (mut catalog, _dir) = sample_catalog();
    catalog.save().unwrap();

    catalog.add_book("Unsaved", "Author", "2000", "Drama").unwrap();
    catalog.load().unwrap();

    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_load_missing_file_keeps_records() {
    let (mut catalog, dir) = sample_catalog();

    let report = catalog.load().unwrap();

    assert!(report.file_created);
    assert!(dir.path().join("library_books.txt").exists());
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_failed_load_keeps_records() {
    let (mut catalog, dir) = sample_catalog();
    let before = catalog.list_books();

    let result = catalog.load_from(dir.path());

    assert!(matches!(result, Err(LibraryError::Io(_))));
    assert_eq!(catalog.list_books(), before);
}

#[test]
fn test_save_to_and_load_from_other_path() {
    let (mut catalog, dir) = sample_catalog();
    let other = dir.path().join("backup.txt");

    catalog.save_to(&other).unwrap();
    catalog.clear();
    catalog.load_from(&other).unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(!dir.path().join("library_books.txt").exists());
}

#[test]
fn test_save_failure_keeps_records() {
    let (catalog, dir) = sample_catalog();

    let result = catalog.save_to(&dir.path().join("missing").join("out.txt"));

    assert!(matches!(result, Err(LibraryError::Io(_))));
    assert_eq!(catalog.len(), 3);
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.data_file.to_str(), Some("library_books.txt"));
    assert_eq!(config.cancel_sentinel, "0");
    assert_eq!(config.title_width, 30);
    assert_eq!(config.author_width, 20);
    assert_eq!(config.genre_width, 30);
}

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .data_file("books.txt")
        .cancel_sentinel("q")
        .title_width(10)
        .author_width(8)
        .genre_width(12)
        .build();

    assert_eq!(config.data_file.to_str(), Some("books.txt"));
    assert_eq!(config.cancel_sentinel, "q");
    assert_eq!(config.title_width, 10);
    assert_eq!(config.author_width, 8);
    assert_eq!(config.genre_width, 12);
}

#[test]
fn test_invalid_config_rejected() {
    let configs = [
        Config::builder().data_file("").build(),
        Config::builder().cancel_sentinel("  ").build(),
        Config::builder().title_width(0).build(),
        Config::builder().genre_width(0).build(),
    ];

    for config in configs {
        assert!(matches!(
            Catalog::new(config),
            Err(LibraryError::Config(_))
        ));
    }
}
