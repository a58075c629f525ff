// PlaceBook services
// Services provide core functionality: place lookup, location, image decoding and storage, the map surface, media capture, settings.

pub mod image_loader;
pub mod image_store;
pub mod location_service;
pub mod map_surface;
pub mod media_picker;
pub mod places_service;
pub mod settings_engine;
