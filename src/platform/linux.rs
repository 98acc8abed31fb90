// RBCAD Viewer platform paths for Linux
// Config: ~/.config/rbcad-viewer
// Data:   ~/.local/share/rbcad-viewer

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for RBCAD Viewer on Linux.
/// Uses `$XDG_CONFIG_HOME/rbcad-viewer` if set, otherwise `~/.config/rbcad-viewer`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("rbcad-viewer"),
        _ => home_dir().join(".config").join("rbcad-viewer"),
    }
}

/// Returns the data directory for RBCAD Viewer on Linux.
/// Uses `$XDG_DATA_HOME/rbcad-viewer` if set, otherwise `~/.local/share/rbcad-viewer`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("rbcad-viewer"),
        _ => home_dir().join(".local").join("share").join("rbcad-viewer"),
    }
}

pub const HELPER_FILE_NAME: &str = "engine-helper";
