// PlaceBook shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod category;
pub mod errors;
pub mod geo;
pub mod lifecycle;
pub mod marker;
pub mod place;
pub mod settings;
