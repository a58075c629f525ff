//! Maps Controller for PlaceBook.
//!
//! Drives the map view: resolves tapped points of interest into transient
//! markers with place details and a photo, turns info-window taps into
//! saved bookmarks or editor navigation, mirrors the stored bookmark set
//! back onto the map, and moves the camera for location and list-row
//! requests.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::marker_manager::{MarkerManager, MarkerManagerTrait};
use crate::services::location_service::LocationProvider;
use crate::services::map_surface::MapSurface;
use crate::services::places_service::PlacesService;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;
use crate::types::lifecycle::CancellationFlag;
use crate::types::marker::{MarkerId, MarkerTag};
use crate::types::place::{PlaceField, PointOfInterest};
use crate::types::settings::PlacebookSettings;

/// What a tap on an info window resolved to; the host reacts accordingly.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoWindowAction {
    /// A tapped place was persisted under the returned bookmark ID.
    SavedNewBookmark(i64),
    /// A saved bookmark's window was tapped; the host opens the editor.
    EditBookmark(i64),
    /// The marker carried no payload.
    Ignored,
}

/// Controller for one map view. Owns the surface and the marker
/// bookkeeping; everything else is shared handles.
pub struct MapsController<M: MapSurface> {
    map: M,
    markers: MarkerManager,
    store: BookmarkStore,
    places: Arc<dyn PlacesService>,
    location: Arc<dyn LocationProvider>,
    settings: PlacebookSettings,
    lifecycle: CancellationFlag,
}

impl<M: MapSurface> MapsController<M> {
    pub fn new(
        map: M,
        store: BookmarkStore,
        places: Arc<dyn PlacesService>,
        location: Arc<dyn LocationProvider>,
        settings: PlacebookSettings,
    ) -> Self {
        MapsController {
            map,
            markers: MarkerManager::new(),
            store,
            places,
            location,
            settings,
            lifecycle: CancellationFlag::new(),
        }
    }

    /// Resolves a tapped point of interest into a transient marker.
    ///
    /// Fetches the place's details; on failure nothing is added. The
    /// place's first photo is then fetched bounded to the configured image
    /// size; a photo failure degrades to a marker without one. Returns the
    /// new marker's ID, or `None` when the flow aborted or the controller
    /// was torn down mid-fetch.
    pub async fn display_poi(&mut self, poi: &PointOfInterest) -> Option<MarkerId> {
        debug!(place_id = %poi.place_id, name = %poi.name, "resolving tapped place");
        let place = match self
            .places
            .fetch_place(&poi.place_id, PlaceField::poi_mask())
            .await
        {
            Ok(place) => place,
            Err(e) => {
                error!(place_id = %poi.place_id, error = %e, "place details fetch failed");
                return None;
            }
        };
        if self.lifecycle.is_cancelled() {
            return None;
        }

        let photo = match place.primary_photo() {
            Some(metadata) => {
                let fetched = self
                    .places
                    .fetch_photo(
                        metadata,
                        self.settings.images.max_width,
                        self.settings.images.max_height,
                    )
                    .await;
                match fetched {
                    Ok(image) => Some(image),
                    Err(e) => {
                        warn!(
                            place_id = %place.place_id,
                            error = %e,
                            "photo fetch failed, showing place without one"
                        );
                        None
                    }
                }
            }
            None => None,
        };
        if self.lifecycle.is_cancelled() {
            return None;
        }

        let marker = self.markers.add_transient(&mut self.map, place, photo);
        self.map.show_info_window(marker);
        Some(marker)
    }

    /// Reacts to a tap on a marker's info window.
    ///
    /// A transient place is persisted (photo included when present) and its
    /// marker removed; the saved-bookmark mirror re-adds it on the next
    /// snapshot. A saved bookmark's window closes and the host is told to
    /// open the editor. Untagged markers are ignored.
    pub async fn handle_info_window_click(
        &mut self,
        marker: MarkerId,
    ) -> Result<InfoWindowAction, BookmarkError> {
        match self.markers.tag(marker) {
            Some(MarkerTag::TransientPlace(info)) => {
                let id = self
                    .store
                    .add_bookmark_from_place(&info.place, info.photo.as_ref())
                    .await?;
                self.markers.remove(&mut self.map, marker);
                info!(bookmark_id = id, "tapped place saved as bookmark");
                Ok(InfoWindowAction::SavedNewBookmark(id))
            }
            Some(MarkerTag::SavedBookmark(bookmark)) => {
                let id = bookmark.id.ok_or(BookmarkError::NotPersisted)?;
                self.map.hide_info_window();
                Ok(InfoWindowAction::EditBookmark(id))
            }
            None => Ok(InfoWindowAction::Ignored),
        }
    }

    /// Mirrors a fresh bookmark snapshot onto the map with a full rebuild.
    pub fn handle_bookmarks_changed(&mut self, bookmarks: &[Bookmark]) {
        debug!(count = bookmarks.len(), "rebuilding bookmark markers");
        self.markers.rebuild(&mut self.map, bookmarks);
    }

    /// Centers the camera on the device's last known location.
    ///
    /// Requests permission interactively when missing; a denial stalls the
    /// flow until a later grant. An unknown location moves nothing.
    pub async fn show_current_location(&mut self) {
        if !self.location.has_permission() && !self.location.request_permission().await {
            warn!("location permission denied, leaving camera in place");
            return;
        }
        match self.location.last_location().await {
            Ok(Some(point)) => {
                self.map.move_camera(point, self.settings.map.default_zoom);
            }
            Ok(None) => warn!("no last known location, leaving camera in place"),
            Err(e) => warn!(error = %e, "location lookup failed, leaving camera in place"),
        }
    }

    /// Animates to a saved bookmark's marker and opens its info window.
    pub fn move_to_bookmark(&mut self, bookmark_id: i64) {
        let Some(marker) = self.markers.marker_for_bookmark(bookmark_id) else {
            warn!(bookmark_id, "no marker for requested bookmark");
            return;
        };
        let Some(MarkerTag::SavedBookmark(bookmark)) = self.markers.tag(marker) else {
            return;
        };
        let target = bookmark.location;
        self.map.show_info_window(marker);
        self.map
            .animate_camera(target, self.settings.map.default_zoom);
    }

    /// Cancels in-flight place resolution; call when the view goes away.
    pub fn teardown(&mut self) {
        self.lifecycle.cancel();
    }

    /// The map surface, for hosts that need to drive it directly.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Marker bookkeeping, exposed for inspection.
    pub fn markers(&self) -> &MarkerManager {
        &self.markers
    }
}
