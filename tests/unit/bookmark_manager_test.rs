//! Unit tests for the BookmarkManager public API.
//!
//! These tests exercise bookmark CRUD operations through the
//! `BookmarkManagerTrait` interface, using an in-memory SQLite database.

use placebook::database::Database;
use placebook::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use placebook::types::bookmark::Bookmark;
use placebook::types::category::Category;
use placebook::types::errors::BookmarkError;
use placebook::types::geo::GeoPoint;

/// Helper: create a fresh in-memory database with migrations applied.
fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

/// Helper: an unsaved bookmark with distinguishable field values.
fn sample_bookmark(name: &str) -> Bookmark {
    Bookmark {
        id: None,
        place_id: Some(format!("place-{}", name.to_lowercase())),
        name: name.to_string(),
        address: "1 Ferry Plaza, San Francisco".to_string(),
        phone: "415-555-0100".to_string(),
        notes: "open weekends".to_string(),
        location: GeoPoint::new(37.7955, -122.3937),
        category: Category::Shopping,
        created_at: 0,
        updated_at: 0,
    }
}

/// Inserting a bookmark assigns a row ID, stamps both timestamps, and
/// writes the ID back into the struct.
#[test]
fn test_insert_assigns_id_and_timestamps() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let mut bookmark = sample_bookmark("Ferry Building");
    let id = mgr.insert(&mut bookmark).unwrap();

    assert!(id > 0, "SQLite row ids start at 1");
    assert_eq!(bookmark.id, Some(id), "insert must write the id back");
    assert!(bookmark.created_at > 0, "created_at must be stamped");
    assert_eq!(
        bookmark.created_at, bookmark.updated_at,
        "both timestamps match on insert"
    );
    assert_eq!(mgr.count().unwrap(), 1);
}

/// A bookmark that already carries an ID must be rejected rather than
/// silently duplicated.
#[test]
fn test_insert_rejects_already_persisted_bookmark() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let mut bookmark = sample_bookmark("Ferry Building");
    let id = mgr.insert(&mut bookmark).unwrap();

    let result = mgr.insert(&mut bookmark);
    match result {
        Err(BookmarkError::AlreadyPersisted(existing)) => assert_eq!(existing, id),
        other => panic!("expected AlreadyPersisted, got {:?}", other),
    }
    assert_eq!(mgr.count().unwrap(), 1, "no duplicate row may be created");
}

/// Fetching by ID returns the stored field values.
#[test]
fn test_get_returns_inserted_fields() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let mut bookmark = sample_bookmark("Ferry Building");
    let id = mgr.insert(&mut bookmark).unwrap();

    let fetched = mgr.get(id).unwrap().expect("bookmark should exist");
    assert_eq!(fetched.id, Some(id));
    assert_eq!(fetched.place_id, bookmark.place_id);
    assert_eq!(fetched.name, "Ferry Building");
    assert_eq!(fetched.address, "1 Ferry Plaza, San Francisco");
    assert_eq!(fetched.phone, "415-555-0100");
    assert_eq!(fetched.notes, "open weekends");
    assert_eq!(fetched.location, GeoPoint::new(37.7955, -122.3937));
    assert_eq!(fetched.category, Category::Shopping);
    assert_eq!(fetched.created_at, bookmark.created_at);
}

/// Fetching an unknown ID is not an error; it returns `None`.
#[test]
fn test_get_missing_returns_none() {
    let db = setup();
    let mgr = BookmarkManager::new(db.connection());

    let fetched = mgr.get(999).unwrap();
    assert!(fetched.is_none());
}

/// A bookmark created without a place (long-press flow) stores a NULL
/// place_id and reads back as `None`.
#[test]
fn test_manual_bookmark_roundtrips_null_place_id() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let mut bookmark = sample_bookmark("Dropped Pin");
    bookmark.place_id = None;
    let id = mgr.insert(&mut bookmark).unwrap();

    let fetched = mgr.get(id).unwrap().expect("bookmark should exist");
    assert_eq!(fetched.place_id, None);
}

/// Update rewrites every editable field and bumps updated_at.
#[test]
fn test_update_rewrites_fields() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let mut bookmark = sample_bookmark("Ferry Building");
    let id = mgr.insert(&mut bookmark).unwrap();

    bookmark.name = "Ferry Building Marketplace".to_string();
    bookmark.phone = "415-555-0199".to_string();
    bookmark.notes = "try the oysters".to_string();
    bookmark.category = Category::Restaurant;
    mgr.update(&bookmark).unwrap();

    let fetched = mgr.get(id).unwrap().expect("bookmark should exist");
    assert_eq!(fetched.name, "Ferry Building Marketplace");
    assert_eq!(fetched.phone, "415-555-0199");
    assert_eq!(fetched.notes, "try the oysters");
    assert_eq!(fetched.category, Category::Restaurant);
    assert!(
        fetched.updated_at >= fetched.created_at,
        "updated_at may never run behind created_at"
    );
}

/// Updating a bookmark that was never inserted fails without touching the
/// database.
#[test]
fn test_update_unsaved_bookmark_is_rejected() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let bookmark = sample_bookmark("Ferry Building");
    let result = mgr.update(&bookmark);
    assert!(matches!(result, Err(BookmarkError::NotPersisted)));
    assert_eq!(mgr.count().unwrap(), 0);
}

/// Updating an ID that no longer exists reports NotFound.
#[test]
fn test_update_missing_row_reports_not_found() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let mut bookmark = sample_bookmark("Ferry Building");
    bookmark.id = Some(42);
    let result = mgr.update(&bookmark);
    assert!(matches!(result, Err(BookmarkError::NotFound(42))));
}

/// `all()` returns every bookmark sorted by name for stable list display.
#[test]
fn test_all_returns_bookmarks_ordered_by_name() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    for name in ["Zuni Cafe", "Alcatraz Island", "Mission Dolores"] {
        let mut bookmark = sample_bookmark(name);
        mgr.insert(&mut bookmark).unwrap();
    }

    let names: Vec<String> = mgr.all().unwrap().into_iter().map(|b| b.name).collect();
    assert_eq!(names, ["Alcatraz Island", "Mission Dolores", "Zuni Cafe"]);
}

/// Deleting removes the row; a second delete of the same ID is NotFound.
#[test]
fn test_delete_removes_row() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let mut bookmark = sample_bookmark("Ferry Building");
    let id = mgr.insert(&mut bookmark).unwrap();
    assert_eq!(mgr.count().unwrap(), 1);

    mgr.delete(id).unwrap();
    assert_eq!(mgr.count().unwrap(), 0);
    assert!(mgr.get(id).unwrap().is_none());

    let result = mgr.delete(id);
    assert!(matches!(result, Err(BookmarkError::NotFound(_))));
}

/// Every category value survives a database round-trip through its label.
#[test]
fn test_category_roundtrips_through_storage() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    for (i, category) in Category::all().iter().enumerate() {
        let mut bookmark = sample_bookmark(&format!("Stop {}", i));
        bookmark.category = *category;
        let id = mgr.insert(&mut bookmark).unwrap();

        let fetched = mgr.get(id).unwrap().expect("bookmark should exist");
        assert_eq!(fetched.category, *category);
    }
}
