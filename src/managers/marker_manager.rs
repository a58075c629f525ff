//! Marker Manager for PlaceBook.
//!
//! Transient bookkeeping tying bookmarks and tapped places to the markers
//! showing them on the map surface. All state here is rebuilt from the
//! persisted bookmark set and is owned by a single controller, so no
//! locking is involved.

use std::collections::HashMap;

use image::DynamicImage;

use crate::services::map_surface::MapSurface;
use crate::types::bookmark::Bookmark;
use crate::types::marker::{
    MarkerId, MarkerOptions, MarkerTag, PlaceInfo, HUE_AZURE, SAVED_MARKER_ALPHA,
};
use crate::types::place::Place;

/// Trait defining marker bookkeeping operations.
pub trait MarkerManagerTrait {
    /// Clears the map and re-adds one marker per saved bookmark.
    fn rebuild(&mut self, map: &mut dyn MapSurface, bookmarks: &[Bookmark]);
    /// Adds a default-styled marker for a tapped place carrying its payload.
    fn add_transient(
        &mut self,
        map: &mut dyn MapSurface,
        place: Place,
        photo: Option<DynamicImage>,
    ) -> MarkerId;
    fn tag(&self, marker: MarkerId) -> Option<&MarkerTag>;
    /// Removes a marker from the map and drops its bookkeeping.
    fn remove(&mut self, map: &mut dyn MapSurface, marker: MarkerId);
    fn marker_for_bookmark(&self, bookmark_id: i64) -> Option<MarkerId>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Marker bookkeeping kept in memory alongside the map surface.
#[derive(Debug, Default)]
pub struct MarkerManager {
    tags: HashMap<MarkerId, MarkerTag>,
    by_bookmark: HashMap<i64, MarkerId>,
}

impl MarkerManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn saved_marker_options(bookmark: &Bookmark) -> MarkerOptions {
        let mut options = MarkerOptions::new(bookmark.location, bookmark.name.clone());
        if !bookmark.phone.is_empty() {
            options.snippet = Some(bookmark.phone.clone());
        }
        options.hue = HUE_AZURE;
        options.alpha = SAVED_MARKER_ALPHA;
        options
    }
}

impl MarkerManagerTrait for MarkerManager {
    /// Rebuilds the marker layer from the full bookmark set.
    ///
    /// Always a wholesale pass: the map is cleared, the bookkeeping is
    /// dropped, and one azure marker per bookmark is re-added. No
    /// incremental patching happens anywhere, so the marker layer can
    /// never drift from the persisted set.
    fn rebuild(&mut self, map: &mut dyn MapSurface, bookmarks: &[Bookmark]) {
        map.clear();
        self.tags.clear();
        self.by_bookmark.clear();

        for bookmark in bookmarks {
            let Some(id) = bookmark.id else {
                continue;
            };
            let marker = map.add_marker(Self::saved_marker_options(bookmark));
            self.tags
                .insert(marker, MarkerTag::SavedBookmark(bookmark.clone()));
            self.by_bookmark.insert(id, marker);
        }
    }

    fn add_transient(
        &mut self,
        map: &mut dyn MapSurface,
        place: Place,
        photo: Option<DynamicImage>,
    ) -> MarkerId {
        let mut options = MarkerOptions::new(place.location, place.name.clone());
        options.snippet = place.phone.clone();

        let marker = map.add_marker(options);
        self.tags.insert(
            marker,
            MarkerTag::TransientPlace(Box::new(PlaceInfo { place, photo })),
        );
        marker
    }

    fn tag(&self, marker: MarkerId) -> Option<&MarkerTag> {
        self.tags.get(&marker)
    }

    fn remove(&mut self, map: &mut dyn MapSurface, marker: MarkerId) {
        map.remove_marker(marker);
        if let Some(MarkerTag::SavedBookmark(bookmark)) = self.tags.remove(&marker) {
            if let Some(id) = bookmark.id {
                self.by_bookmark.remove(&id);
            }
        }
    }

    fn marker_for_bookmark(&self, bookmark_id: i64) -> Option<MarkerId> {
        self.by_bookmark.get(&bookmark_id).copied()
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
