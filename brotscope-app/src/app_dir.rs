//! Directory where the executable lives. Config and snapshots are stored next
//! to the app so a standalone build carries its own state.

use std::path::PathBuf;

/// Directory containing the running executable. Falls back to current directory if unavailable.
pub fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

pub fn config_path() -> PathBuf {
    exe_directory().join("config.json")
}

/// Directory for PNG snapshots taken with `S`.
pub fn screenshots_directory() -> PathBuf {
    exe_directory().join("screenshots")
}
