// PlaceBook platform paths for Linux
// Config: ~/.config/placebook
// Data:   ~/.local/share/placebook
// Cache:  ~/.cache/placebook

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for PlaceBook on Linux.
/// Uses `$XDG_CONFIG_HOME/placebook` if set, otherwise `~/.config/placebook`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("placebook")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("placebook")
    }
}

/// Returns the data directory for PlaceBook on Linux.
/// Uses `$XDG_DATA_HOME/placebook` if set, otherwise `~/.local/share/placebook`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("placebook")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("placebook")
    }
}

/// Returns the cache directory for PlaceBook on Linux.
/// Uses `$XDG_CACHE_HOME/placebook` if set, otherwise `~/.cache/placebook`.
pub fn get_cache_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("placebook")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".cache").join("placebook")
    }
}
