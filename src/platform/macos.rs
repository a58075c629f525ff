// PlaceBook platform paths for macOS
// Config: ~/Library/Application Support/PlaceBook
// Data:   ~/Library/Application Support/PlaceBook
// Cache:  ~/Library/Caches/PlaceBook

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for PlaceBook on macOS.
/// `~/Library/Application Support/PlaceBook`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("PlaceBook")
}

/// Returns the data directory for PlaceBook on macOS.
/// `~/Library/Application Support/PlaceBook`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("PlaceBook")
}

/// Returns the cache directory for PlaceBook on macOS.
/// `~/Library/Caches/PlaceBook`
pub fn get_cache_dir() -> PathBuf {
    home_dir().join("Library").join("Caches").join("PlaceBook")
}
