//! Media capture and pick capability probes for PlaceBook.
//!
//! Whether a photo can be replaced depends on what the platform can do:
//! capture a new one with a camera, pick an existing one from a gallery,
//! both, or neither. When neither resolves, the replace action is
//! suppressed entirely rather than shown and broken.

/// Trait probing the platform's media capabilities.
pub trait MediaPicker: Send + Sync {
    /// Whether a camera app is available to capture a new photo.
    fn can_capture(&self) -> bool;
    /// Whether a gallery app is available to pick an existing photo.
    fn can_pick(&self) -> bool;
}

/// A way the user can supply a replacement photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    Camera,
    Gallery,
}

/// The photo-source choices to offer, in dialog order, or `None` when the
/// platform supports neither and the option must not be offered at all.
pub fn photo_options(picker: &dyn MediaPicker) -> Option<Vec<PhotoSource>> {
    let mut options = Vec::new();
    if picker.can_capture() {
        options.push(PhotoSource::Camera);
    }
    if picker.can_pick() {
        options.push(PhotoSource::Gallery);
    }
    if options.is_empty() {
        None
    } else {
        Some(options)
    }
}

/// Fixed-capability picker used by tests and the demo walkthrough.
pub struct StaticMediaPicker {
    capture: bool,
    pick: bool,
}

impl StaticMediaPicker {
    pub fn new(capture: bool, pick: bool) -> Self {
        Self { capture, pick }
    }
}

impl MediaPicker for StaticMediaPicker {
    fn can_capture(&self) -> bool {
        self.capture
    }

    fn can_pick(&self) -> bool {
        self.pick
    }
}
