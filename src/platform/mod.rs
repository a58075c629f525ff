// PlaceBook platform abstraction
// Provides platform-specific paths and utilities for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for PlaceBook.
///
/// - **Linux**: `~/.config/placebook` (or `$XDG_CONFIG_HOME/placebook`)
/// - **macOS**: `~/Library/Application Support/PlaceBook`
/// - **Windows**: `%APPDATA%/PlaceBook`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for PlaceBook.
///
/// - **Linux**: `~/.local/share/placebook` (or `$XDG_DATA_HOME/placebook`)
/// - **macOS**: `~/Library/Application Support/PlaceBook`
/// - **Windows**: `%APPDATA%/PlaceBook`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Returns the platform-specific cache directory for PlaceBook.
///
/// - **Linux**: `~/.cache/placebook` (or `$XDG_CACHE_HOME/placebook`)
/// - **macOS**: `~/Library/Caches/PlaceBook`
/// - **Windows**: `%LOCALAPPDATA%/PlaceBook/cache`
pub fn get_cache_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_cache_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_cache_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_cache_dir()
    }
}
