// PlaceBook state managers
// Managers handle stateful operations: bookmark persistence, marker bookkeeping, the map flow, and detail editing.

pub mod bookmark_manager;
pub mod bookmark_store;
pub mod details_editor;
pub mod maps_controller;
pub mod marker_manager;
