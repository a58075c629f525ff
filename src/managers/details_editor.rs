//! Bookmark Details Editor for PlaceBook.
//!
//! Backs the detail form for one saved bookmark: field edits with save
//! validation, a two-phase delete, image replacement from camera capture
//! or gallery pick, and the share-place payload.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::managers::bookmark_store::BookmarkStore;
use crate::services::image_loader::{self, StreamSource};
use crate::services::image_store::ImageStore;
use crate::services::media_picker::{self, MediaPicker, PhotoSource};
use crate::types::bookmark::{Bookmark, BookmarkEdits};
use crate::types::errors::BookmarkError;
use crate::types::settings::PlacebookSettings;

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// All edits persisted; the host dismisses the editor.
    Saved,
    /// The name was empty; nothing was written and the editor stays open.
    RejectedEmptyName,
}

/// Result of a delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Record and image are gone; the host dismisses the editor.
    Deleted,
    /// Delete was never armed with `request_delete`; nothing happened.
    NotConfirmed,
}

/// What to hand the platform share sheet for this bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub subject: String,
    pub text: String,
}

/// Editor session over one saved bookmark.
pub struct DetailsEditor {
    store: BookmarkStore,
    images: ImageStore,
    media: Arc<dyn MediaPicker>,
    settings: PlacebookSettings,
    bookmark: Bookmark,
    id: i64,
    delete_armed: bool,
}

impl DetailsEditor {
    /// Loads the bookmark and opens an editor session over it.
    pub async fn load(
        store: BookmarkStore,
        images: ImageStore,
        media: Arc<dyn MediaPicker>,
        settings: PlacebookSettings,
        id: i64,
    ) -> Result<Self, BookmarkError> {
        let bookmark = store.get(id).await?.ok_or(BookmarkError::NotFound(id))?;
        debug!(bookmark_id = id, name = %bookmark.name, "details editor opened");
        Ok(DetailsEditor {
            store,
            images,
            media,
            settings,
            bookmark,
            id,
            delete_armed: false,
        })
    }

    /// The bookmark under edit, for populating the form.
    pub fn bookmark(&self) -> &Bookmark {
        &self.bookmark
    }

    /// The current field values as an edit set, ready to be amended.
    pub fn current_edits(&self) -> BookmarkEdits {
        BookmarkEdits {
            name: self.bookmark.name.clone(),
            phone: self.bookmark.phone.clone(),
            address: self.bookmark.address.clone(),
            notes: self.bookmark.notes.clone(),
            category: self.bookmark.category,
        }
    }

    /// The bookmark's stored image, if any.
    pub fn image(&self) -> Option<DynamicImage> {
        self.images.load(self.id)
    }

    /// Validates and persists the edited fields.
    ///
    /// A blank name rejects the save without touching the record; the
    /// editor stays open with its state unchanged.
    pub async fn save(&mut self, edits: BookmarkEdits) -> Result<SaveOutcome, BookmarkError> {
        if edits.name.trim().is_empty() {
            return Ok(SaveOutcome::RejectedEmptyName);
        }
        let mut updated = self.bookmark.clone();
        updated.name = edits.name;
        updated.phone = edits.phone;
        updated.address = edits.address;
        updated.notes = edits.notes;
        updated.category = edits.category;
        self.store.update(updated.clone()).await?;
        self.bookmark = updated;
        info!(bookmark_id = self.id, "bookmark edits saved");
        Ok(SaveOutcome::Saved)
    }

    /// Arms deletion; the host shows its confirmation prompt now.
    pub fn request_delete(&mut self) {
        self.delete_armed = true;
    }

    /// Disarms a pending deletion.
    pub fn cancel_delete(&mut self) {
        self.delete_armed = false;
    }

    /// Whether deletion is awaiting confirmation.
    pub fn delete_armed(&self) -> bool {
        self.delete_armed
    }

    /// Deletes the bookmark and its image, if deletion was armed.
    pub async fn confirm_delete(&mut self) -> Result<DeleteOutcome, BookmarkError> {
        if !self.delete_armed {
            return Ok(DeleteOutcome::NotConfirmed);
        }
        self.delete_armed = false;
        self.store.delete(self.id).await?;
        info!(bookmark_id = self.id, "bookmark deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Photo sources the platform can offer, in dialog order, or `None`
    /// when neither camera nor gallery resolves (the replace-photo action
    /// is suppressed entirely).
    pub fn photo_options(&self) -> Option<Vec<PhotoSource>> {
        media_picker::photo_options(self.media.as_ref())
    }

    /// Creates the file a camera capture will write into.
    ///
    /// Returns `None` when the file cannot be created; the capture flow
    /// aborts with no partial state.
    pub fn begin_capture(&self) -> Option<PathBuf> {
        match self.images.create_capture_file() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "could not create capture file, aborting capture");
                None
            }
        }
    }

    /// Ingests a completed camera capture.
    ///
    /// The file is decoded bounded to the configured image size and stored
    /// immediately under this bookmark's ID. A decode failure leaves the
    /// stored image untouched.
    pub async fn capture_completed(&mut self, path: &Path) -> Result<(), BookmarkError> {
        let bounds = self.settings.images;
        match image_loader::decode_file_to_size(path, bounds.max_width, bounds.max_height) {
            Some(image) => self.store.set_image(self.id, image).await,
            None => Ok(()),
        }
    }

    /// Ingests a gallery pick from a reopenable stream.
    pub async fn pick_completed(&mut self, source: &dyn StreamSource) -> Result<(), BookmarkError> {
        let bounds = self.settings.images;
        match image_loader::decode_stream_to_size(source, bounds.max_width, bounds.max_height) {
            Some(image) => self.store.set_image(self.id, image).await,
            None => Ok(()),
        }
    }

    /// Builds the share-sheet payload: a Google Maps directions link that
    /// targets the place when the bookmark came from a place search, else
    /// the raw coordinates.
    pub fn share_payload(&self) -> SharePayload {
        let url = match &self.bookmark.place_id {
            Some(place_id) => format!(
                "https://www.google.com/maps/dir/?api=1&destination={}&destination_place_id={}",
                urlencoding::encode(&self.bookmark.name),
                urlencoding::encode(place_id)
            ),
            None => {
                let destination = format!(
                    "{},{}",
                    self.bookmark.location.latitude, self.bookmark.location.longitude
                );
                format!(
                    "https://www.google.com/maps/dir/?api=1&destination={}",
                    urlencoding::encode(&destination)
                )
            }
        };
        SharePayload {
            subject: format!("Sharing {}", self.bookmark.name),
            text: format!("Check out {} at:\n{}", self.bookmark.name, url),
        }
    }
}
