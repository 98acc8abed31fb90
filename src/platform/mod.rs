// RBCAD Viewer platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
use linux as imp;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as imp;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
use windows as imp;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/rbcad-viewer` (or `$XDG_CONFIG_HOME/rbcad-viewer`)
/// - **macOS**: `~/Library/Application Support/RBCADViewer`
/// - **Windows**: `%APPDATA%/RBCADViewer`
pub fn get_config_dir() -> PathBuf {
    imp::get_config_dir()
}

/// Returns the platform-specific data directory.
///
/// - **Linux**: `~/.local/share/rbcad-viewer` (or `$XDG_DATA_HOME/rbcad-viewer`)
/// - **macOS**: `~/Library/Application Support/RBCADViewer`
/// - **Windows**: `%LOCALAPPDATA%/RBCADViewer`
pub fn get_data_dir() -> PathBuf {
    imp::get_data_dir()
}

/// Where an installed engine helper is expected: `<data_dir>/bin/engine-helper`.
pub fn default_helper_path() -> PathBuf {
    get_data_dir().join("bin").join(imp::HELPER_FILE_NAME)
}
