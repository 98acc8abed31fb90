use serde::{Deserialize, Serialize};

use crate::platform;

/// Address the viewer loads when nothing else is configured.
pub const DEFAULT_START_URL: &str = "https://rbcad.netlify.app/";

/// Window title used when nothing else is configured.
pub const DEFAULT_TITLE: &str = "RBCAD Website Viewer";

/// Top-level viewer settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerSettings {
    pub window: WindowSettings,
    pub start_url: String,
    /// Engine helper to start before the window opens. `None` skips the launch.
    pub helper_path: Option<String>,
    pub devtools: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            start_url: DEFAULT_START_URL.to_string(),
            helper_path: Some(
                platform::default_helper_path()
                    .to_string_lossy()
                    .to_string(),
            ),
            devtools: false,
        }
    }
}

/// Title and geometry of the main window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x: 100,
            y: 100,
            width: 1024,
            height: 768,
        }
    }
}
