//! Bookmark image storage for PlaceBook.
//!
//! Bookmark photos live out of line as PNG files named by bookmark ID
//! under the application's private image directory. The database row and
//! the image file are only ever associated through that ID.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use image::{DynamicImage, ImageFormat};
use tracing::warn;
use uuid::Uuid;

use crate::types::bookmark::Bookmark;
use crate::types::errors::ImageError;

/// Directory under the image root where camera capture targets are created.
const CAPTURES_DIR: &str = "captures";

/// File-backed store for bookmark images.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Creates the store, making sure the image directory exists.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, ImageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| ImageError::Io(e.to_string()))?;
        Ok(Self { root })
    }

    /// Path of the image file for the given bookmark ID.
    pub fn image_path(&self, id: i64) -> PathBuf {
        self.root.join(Bookmark::image_filename(id))
    }

    /// Writes the bookmark's image as a PNG file, replacing any previous one.
    pub fn save(&self, id: i64, image: &DynamicImage) -> Result<(), ImageError> {
        let path = self.image_path(id);
        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => ImageError::Io(io.to_string()),
                other => ImageError::Encode(other.to_string()),
            })
    }

    /// Loads the bookmark's image, if one has been stored.
    ///
    /// A missing file is the normal "no image" state and returns `None`
    /// silently; an unreadable file also returns `None` but is logged.
    pub fn load(&self, id: i64) -> Option<DynamicImage> {
        let path = self.image_path(id);
        if !path.exists() {
            return None;
        }
        match image::open(&path) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load bookmark image");
                None
            }
        }
    }

    /// Removes the bookmark's image file. A file that never existed is fine.
    pub fn delete(&self, id: i64) -> Result<(), ImageError> {
        let path = self.image_path(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ImageError::Io(e.to_string())),
        }
    }

    /// Creates a unique, empty capture target file for the camera to write
    /// into and returns its path.
    ///
    /// If the file cannot be created the capture flow must abort; no
    /// partial state is left behind.
    pub fn create_capture_file(&self) -> Result<PathBuf, ImageError> {
        let dir = self.root.join(CAPTURES_DIR);
        fs::create_dir_all(&dir).map_err(|e| ImageError::Io(e.to_string()))?;

        let stamp = Local::now().format("%Y%m%d%H%M%S");
        let name = format!("placebook_{}_{}.jpg", stamp, Uuid::new_v4());
        let path = dir.join(name);
        fs::File::create(&path).map_err(|e| ImageError::Io(e.to_string()))?;
        Ok(path)
    }
}
