//! Bookmark Manager for PlaceBook.
//!
//! Implements `BookmarkManagerTrait` — CRUD operations for place bookmarks,
//! backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::bookmark::Bookmark;
use crate::types::category::Category;
use crate::types::errors::BookmarkError;
use crate::types::geo::GeoPoint;

/// Trait defining bookmark persistence operations.
pub trait BookmarkManagerTrait {
    /// Inserts a new bookmark and assigns its database ID. Returns the ID.
    fn insert(&mut self, bookmark: &mut Bookmark) -> Result<i64, BookmarkError>;
    /// Rewrites all mutable fields of an existing bookmark.
    fn update(&mut self, bookmark: &Bookmark) -> Result<(), BookmarkError>;
    fn get(&self, id: i64) -> Result<Option<Bookmark>, BookmarkError>;
    /// Lists all bookmarks ordered by name.
    fn all(&self) -> Result<Vec<Bookmark>, BookmarkError>;
    fn delete(&mut self, id: i64) -> Result<(), BookmarkError>;
    fn count(&self) -> Result<i64, BookmarkError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads a single `Bookmark` row into a struct.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        let category: String = row.get(8)?;
        Ok(Bookmark {
            id: Some(row.get(0)?),
            place_id: row.get(1)?,
            name: row.get(2)?,
            address: row.get(3)?,
            phone: row.get(4)?,
            notes: row.get(5)?,
            location: GeoPoint {
                latitude: row.get(6)?,
                longitude: row.get(7)?,
            },
            category: Category::from_label(&category),
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }
}

const BOOKMARK_COLUMNS: &str = "id, place_id, name, address, phone, notes, \
     latitude, longitude, category, created_at, updated_at";

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Inserts a new bookmark row and writes the assigned row ID back into
    /// the struct. The ID is assigned exactly once; inserting a bookmark
    /// that already carries one is an error.
    fn insert(&mut self, bookmark: &mut Bookmark) -> Result<i64, BookmarkError> {
        if let Some(id) = bookmark.id {
            return Err(BookmarkError::AlreadyPersisted(id));
        }

        let now = Self::now();
        self.conn
            .execute(
                "INSERT INTO bookmarks (place_id, name, address, phone, notes, \
                 latitude, longitude, category, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    bookmark.place_id,
                    bookmark.name,
                    bookmark.address,
                    bookmark.phone,
                    bookmark.notes,
                    bookmark.location.latitude,
                    bookmark.location.longitude,
                    bookmark.category.label(),
                    now,
                    now,
                ],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        let id = self.conn.last_insert_rowid();
        bookmark.id = Some(id);
        bookmark.created_at = now;
        bookmark.updated_at = now;
        Ok(id)
    }

    /// Rewrites all mutable fields of an existing bookmark.
    fn update(&mut self, bookmark: &Bookmark) -> Result<(), BookmarkError> {
        let id = bookmark.id.ok_or(BookmarkError::NotPersisted)?;
        let now = Self::now();

        let affected = self
            .conn
            .execute(
                "UPDATE bookmarks SET place_id = ?1, name = ?2, address = ?3, \
                 phone = ?4, notes = ?5, latitude = ?6, longitude = ?7, \
                 category = ?8, updated_at = ?9 WHERE id = ?10",
                params![
                    bookmark.place_id,
                    bookmark.name,
                    bookmark.address,
                    bookmark.phone,
                    bookmark.notes,
                    bookmark.location.latitude,
                    bookmark.location.longitude,
                    bookmark.category.label(),
                    now,
                    id,
                ],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id));
        }
        Ok(())
    }

    /// Fetches a single bookmark by ID.
    fn get(&self, id: i64) -> Result<Option<Bookmark>, BookmarkError> {
        let query = format!("SELECT {} FROM bookmarks WHERE id = ?1", BOOKMARK_COLUMNS);
        match self
            .conn
            .query_row(&query, params![id], Self::row_to_bookmark)
        {
            Ok(bookmark) => Ok(Some(bookmark)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(BookmarkError::DatabaseError(e.to_string())),
        }
    }

    /// Lists all bookmarks ordered by name.
    fn all(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        let query = format!("SELECT {} FROM bookmarks ORDER BY name", BOOKMARK_COLUMNS);
        let mut stmt = self
            .conn
            .prepare(&query)
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_bookmark)
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| BookmarkError::DatabaseError(e.to_string()))?);
        }
        Ok(results)
    }

    /// Deletes a bookmark row by ID.
    fn delete(&mut self, id: i64) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id));
        }
        Ok(())
    }

    /// Counts all stored bookmarks.
    fn count(&self) -> Result<i64, BookmarkError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0))
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))
    }
}
