//! App Core for PlaceBook.
//!
//! Central struct wiring settings, persistence, and the platform service
//! seams together, and handing out per-view controllers.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::database::connection::Database;
use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::details_editor::DetailsEditor;
use crate::managers::maps_controller::MapsController;
use crate::services::image_store::ImageStore;
use crate::services::location_service::LocationProvider;
use crate::services::map_surface::MapSurface;
use crate::services::media_picker::MediaPicker;
use crate::services::places_service::PlacesService;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::BookmarkError;
use crate::types::settings::PlacebookSettings;

/// Central application struct holding the store and service seams.
///
/// `MapsController` and `DetailsEditor` are created on demand because they
/// hold per-view state (a map surface, an editing session); everything
/// they need is cloned out of here.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub store: BookmarkStore,
    pub image_store: ImageStore,
    pub places: Arc<dyn PlacesService>,
    pub location: Arc<dyn LocationProvider>,
    pub media: Arc<dyn MediaPicker>,
}

impl App {
    /// Opens the application over a data directory.
    ///
    /// Loads settings (missing file means defaults), opens the database at
    /// `<data_dir>/placebook.db`, roots the image store at
    /// `<data_dir>/images`, and starts the bookmark store's writer task —
    /// so this must run inside a tokio runtime.
    pub fn open(
        data_dir: &Path,
        settings_path: Option<String>,
        places: Arc<dyn PlacesService>,
        location: Arc<dyn LocationProvider>,
        media: Arc<dyn MediaPicker>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            warn!(error = %e, "settings load failed, continuing with defaults");
        }

        std::fs::create_dir_all(data_dir)?;
        let db = Database::open(data_dir.join("placebook.db"))?;
        let image_store = ImageStore::new(data_dir.join("images"))?;
        let store = BookmarkStore::open(db, image_store.clone());

        Ok(Self {
            settings_engine,
            store,
            image_store,
            places,
            location,
            media,
        })
    }

    /// A snapshot of the current settings.
    pub fn settings(&self) -> PlacebookSettings {
        self.settings_engine.get_settings().clone()
    }

    /// Creates a controller for a freshly presented map view.
    pub fn maps_controller<M: MapSurface>(&self, map: M) -> MapsController<M> {
        MapsController::new(
            map,
            self.store.clone(),
            self.places.clone(),
            self.location.clone(),
            self.settings(),
        )
    }

    /// Opens an editing session over a saved bookmark.
    pub async fn details_editor(&self, id: i64) -> Result<DetailsEditor, BookmarkError> {
        DetailsEditor::load(
            self.store.clone(),
            self.image_store.clone(),
            self.media.clone(),
            self.settings(),
            id,
        )
        .await
    }

    /// Startup sequence: log the configured state.
    pub fn startup(&mut self) {
        let settings = self.settings_engine.get_settings();
        info!(
            config_path = self.settings_engine.get_config_path(),
            base_url = %settings.places.base_url,
            default_zoom = settings.map.default_zoom,
            max_image_width = settings.images.max_width,
            max_image_height = settings.images.max_height,
            "placebook configured"
        );
    }
}
