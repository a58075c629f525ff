use image::DynamicImage;
use uuid::Uuid;

use crate::types::bookmark::Bookmark;
use crate::types::geo::GeoPoint;
use crate::types::place::Place;

/// Default marker hue (red).
pub const HUE_RED: f32 = 0.0;
/// Hue used for markers of saved bookmarks (azure).
pub const HUE_AZURE: f32 = 210.0;
/// Alpha applied to markers of saved bookmarks.
pub const SAVED_MARKER_ALPHA: f32 = 0.8;

/// Opaque handle to a marker placed on a map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(Uuid);

impl MarkerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MarkerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual description of a marker handed to the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub position: GeoPoint,
    pub title: String,
    pub snippet: Option<String>,
    pub hue: f32,
    pub alpha: f32,
}

impl MarkerOptions {
    /// A default-styled marker (red, fully opaque).
    pub fn new(position: GeoPoint, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            snippet: None,
            hue: HUE_RED,
            alpha: 1.0,
        }
    }
}

/// Resolved place details bundled with the photo fetched for them.
/// The photo is optional; display never depends on it.
#[derive(Debug, Clone)]
pub struct PlaceInfo {
    pub place: Place,
    pub photo: Option<DynamicImage>,
}

/// Payload attached to a marker, matched exhaustively when its info
/// window is tapped.
#[derive(Debug, Clone)]
pub enum MarkerTag {
    /// A tapped point of interest not yet saved as a bookmark.
    TransientPlace(Box<PlaceInfo>),
    /// A persisted bookmark mirrored onto the map.
    SavedBookmark(Bookmark),
}
