//! App Core for RBCAD Viewer.
//!
//! Holds the resolved settings and the supervised engine helper, and drives
//! the startup/shutdown steps around the GUI event loop.

use crate::services::helper_launcher::{HelperLauncher, HelperLauncherTrait, HelperProcess};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::{HelperError, WindowError};
use crate::types::settings::ViewerSettings;
use crate::types::window::WindowPlan;

/// Central application struct.
pub struct App {
    pub settings: ViewerSettings,
    helper: Option<HelperProcess>,
}

impl App {
    /// Loads settings through the given engine.
    pub fn new(mut settings_engine: SettingsEngine) -> Result<Self, Box<dyn std::error::Error>> {
        let settings = settings_engine.load()?;
        Ok(Self::with_settings(settings))
    }

    pub fn with_settings(settings: ViewerSettings) -> Self {
        Self {
            settings,
            helper: None,
        }
    }

    /// Runs the helper launch step. Never fails: a missing or unstartable
    /// helper is reported and the viewer carries on.
    pub fn startup(&mut self) {
        let Some(path) = self.settings.helper_path.clone() else {
            log::debug!("No engine helper configured");
            return;
        };

        match HelperLauncher::new(path).launch() {
            Ok(process) => self.helper = Some(process),
            Err(HelperError::NotFound(path)) => {
                log::debug!("Continuing without engine helper ({})", path);
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Builds the validated window description from the current settings.
    pub fn window_plan(&self) -> Result<WindowPlan, WindowError> {
        WindowPlan::from_settings(&self.settings)
    }

    pub fn helper(&mut self) -> Option<&mut HelperProcess> {
        self.helper.as_mut()
    }

    /// Stops the engine helper, if one was started.
    pub fn shutdown(&mut self) {
        if let Some(mut process) = self.helper.take() {
            if let Err(e) = process.terminate() {
                log::warn!("{}", e);
            }
        }
    }
}
