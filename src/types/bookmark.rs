use serde::{Deserialize, Serialize};

use crate::types::category::Category;
use crate::types::geo::GeoPoint;
use crate::types::place::Place;

/// Represents a saved place bookmark.
///
/// `id` stays `None` until the first successful insert assigns the
/// database row id; it never changes afterwards. The bookmark image is
/// stored out of line as a file named by [`Bookmark::image_filename`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Option<i64>,
    pub place_id: Option<String>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub notes: String,
    pub location: GeoPoint,
    pub category: Category,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Bookmark {
    /// Builds an unsaved bookmark from a fetched place. Timestamps are left
    /// at zero and stamped on insert.
    pub fn from_place(place: &Place) -> Self {
        Bookmark {
            id: None,
            place_id: Some(place.place_id.clone()),
            name: place.name.clone(),
            address: place.address.clone().unwrap_or_default(),
            phone: place.phone.clone().unwrap_or_default(),
            notes: String::new(),
            location: place.location,
            category: place.category(),
            created_at: 0,
            updated_at: 0,
        }
    }

    /// File name of the bookmark's image within the image store.
    pub fn image_filename(id: i64) -> String {
        format!("bookmark{}.png", id)
    }
}

/// The editable field set written back by the detail editor on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkEdits {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
    pub category: Category,
}
