// PlaceBook platform paths for Windows
// Config: %APPDATA%/PlaceBook
// Data:   %APPDATA%/PlaceBook
// Cache:  %LOCALAPPDATA%/PlaceBook/cache

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for PlaceBook on Windows.
/// `%APPDATA%/PlaceBook`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("PlaceBook")
}

/// Returns the data directory for PlaceBook on Windows.
/// `%APPDATA%/PlaceBook`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("PlaceBook")
}

/// Returns the cache directory for PlaceBook on Windows.
/// `%LOCALAPPDATA%/PlaceBook/cache`
pub fn get_cache_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata)
        .join("PlaceBook")
        .join("cache")
}
