// RBCAD Viewer platform paths for macOS
// Config: ~/Library/Application Support/RBCADViewer
// Data:   ~/Library/Application Support/RBCADViewer

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `~/Library/Application Support/RBCADViewer`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("RBCADViewer")
}

/// Same as the config directory on macOS.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

pub const HELPER_FILE_NAME: &str = "engine-helper";
