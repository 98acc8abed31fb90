// RBCAD Viewer platform paths for Windows
// Config: %APPDATA%/RBCADViewer
// Data:   %LOCALAPPDATA%/RBCADViewer

use std::env;
use std::path::PathBuf;

/// `%APPDATA%/RBCADViewer`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("RBCADViewer")
}

/// `%LOCALAPPDATA%/RBCADViewer`
pub fn get_data_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata).join("RBCADViewer")
}

pub const HELPER_FILE_NAME: &str = "engine-helper.exe";
