use std::fmt;

// === BookmarkError ===

/// Errors related to bookmark persistence operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(i64),
    /// The operation requires a bookmark that has already been inserted.
    NotPersisted,
    /// The bookmark already carries a database ID and cannot be inserted again.
    AlreadyPersisted(i64),
    /// Database operation failed.
    DatabaseError(String),
    /// Writing the bookmark's image file failed.
    ImageWrite(String),
    /// The bookmark store has shut down and no longer accepts commands.
    StoreClosed,
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::NotPersisted => {
                write!(f, "Bookmark has not been saved yet")
            }
            BookmarkError::AlreadyPersisted(id) => {
                write!(f, "Bookmark already persisted: {}", id)
            }
            BookmarkError::DatabaseError(msg) => {
                write!(f, "Bookmark database error: {}", msg)
            }
            BookmarkError::ImageWrite(msg) => {
                write!(f, "Bookmark image write failed: {}", msg)
            }
            BookmarkError::StoreClosed => write!(f, "Bookmark store is closed"),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === PlacesError ===

/// Errors related to the place lookup service.
#[derive(Debug)]
pub enum PlacesError {
    /// The service answered with a non-OK status.
    Api { status: String, message: String },
    /// A network error occurred while contacting the service.
    Network(String),
    /// The service response could not be decoded.
    Decode(String),
}

impl fmt::Display for PlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacesError::Api { status, message } => {
                write!(f, "Place lookup failed ({}): {}", status, message)
            }
            PlacesError::Network(msg) => write!(f, "Place lookup network error: {}", msg),
            PlacesError::Decode(msg) => write!(f, "Place lookup decode error: {}", msg),
        }
    }
}

impl std::error::Error for PlacesError {}

// === LocationError ===

/// Errors related to device location access.
#[derive(Debug)]
pub enum LocationError {
    /// The user has not granted location permission.
    PermissionDenied,
    /// The location provider could not produce a fix.
    Unavailable(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(f, "Location permission denied"),
            LocationError::Unavailable(msg) => write!(f, "Location unavailable: {}", msg),
        }
    }
}

impl std::error::Error for LocationError {}

// === ImageError ===

/// Errors related to image decoding and storage.
#[derive(Debug)]
pub enum ImageError {
    /// A file system error occurred.
    Io(String),
    /// The image data could not be decoded.
    Decode(String),
    /// Encoding the image for storage failed.
    Encode(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Io(msg) => write!(f, "Image I/O error: {}", msg),
            ImageError::Decode(msg) => write!(f, "Image decode error: {}", msg),
            ImageError::Encode(msg) => write!(f, "Image encode error: {}", msg),
        }
    }
}

impl std::error::Error for ImageError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
