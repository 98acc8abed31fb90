//! Validated description of the main window.
//!
//! A `WindowPlan` is everything the UI layer needs to build the window and
//! its single web view. It is checked up front so that GUI construction only
//! fails for platform reasons.

use url::Url;

use super::errors::WindowError;
use super::settings::ViewerSettings;

/// Window position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Title, bounds and the one address the embedded view loads.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPlan {
    title: String,
    bounds: WindowBounds,
    start_url: String,
    devtools: bool,
}

impl WindowPlan {
    /// Builds a plan from settings.
    ///
    /// The start URL must be an absolute `http` or `https` URL and both
    /// dimensions must be non-zero. The address is kept exactly as
    /// configured so the view requests the same string.
    pub fn from_settings(settings: &ViewerSettings) -> Result<Self, WindowError> {
        let parsed = Url::parse(&settings.start_url)
            .map_err(|e| WindowError::InvalidUrl(format!("{} ({})", settings.start_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(WindowError::InvalidUrl(settings.start_url.clone()));
        }

        let w = &settings.window;
        if w.width == 0 || w.height == 0 {
            return Err(WindowError::InvalidGeometry(format!(
                "{}x{}",
                w.width, w.height
            )));
        }

        Ok(Self {
            title: w.title.clone(),
            bounds: WindowBounds {
                x: w.x,
                y: w.y,
                width: w.width,
                height: w.height,
            },
            start_url: settings.start_url.clone(),
            devtools: settings.devtools,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    pub fn devtools(&self) -> bool {
        self.devtools
    }
}
