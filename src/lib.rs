//! PlaceBook — a personal place-bookmarking core: map markers, place
//! lookup, photos, and notes.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
