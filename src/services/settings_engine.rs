// RBCAD Viewer Settings Engine
// Resolves viewer settings from defaults, an optional JSON file and environment overrides.
// The file lives at the platform-specific config path unless overridden.

use std::env;
use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::ViewerSettings;

/// Points the engine at a different settings file.
pub const CONFIG_PATH_ENV: &str = "RBCAD_VIEWER_CONFIG";

/// Replaces the engine helper path. An empty value disables the launch.
pub const HELPER_PATH_ENV: &str = "RBCAD_HELPER_PATH";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ViewerSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &ViewerSettings;
    fn set_settings(&mut self, settings: ViewerSettings);
    fn get_config_path(&self) -> &str;
}

/// Settings engine backed by a JSON file on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: ViewerSettings,
    /// Value of `RBCAD_HELPER_PATH` captured at construction.
    helper_override: Option<String>,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise `RBCAD_VIEWER_CONFIG` is consulted, then the platform config
    /// directory with `viewer.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override
            .or_else(|| env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty()))
            .unwrap_or_else(|| {
                platform::get_config_dir()
                    .join("viewer.json")
                    .to_string_lossy()
                    .to_string()
            });

        Self {
            config_path,
            settings: ViewerSettings::default(),
            helper_override: env::var(HELPER_PATH_ENV).ok(),
        }
    }

    /// Replaces the captured `RBCAD_HELPER_PATH` value. Used by callers that
    /// resolve the override themselves.
    pub fn with_helper_override(mut self, value: Option<String>) -> Self {
        self.helper_override = value;
        self
    }

    fn apply_overrides(&mut self) {
        if let Some(value) = &self.helper_override {
            let trimmed = value.trim();
            self.settings.helper_path = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
            log::debug!(
                "Helper path overridden by {}: {:?}",
                HELPER_PATH_ENV,
                self.settings.helper_path
            );
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file, then applies the environment override.
    ///
    /// A missing file yields defaults. Fields absent from the file keep their defaults.
    /// A malformed file returns a serialization error.
    fn load(&mut self) -> Result<ViewerSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                SettingsError::IoError(format!("Failed to read config file: {}", e))
            })?;

            self.settings = serde_json::from_str(&content).map_err(|e| {
                SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
            })?;
            log::info!("Loaded settings from {}", self.config_path);
        } else {
            self.settings = ViewerSettings::default();
            log::debug!("No settings file at {}, using defaults", self.config_path);
        }

        self.apply_overrides();
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file, creating parent directories.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_settings(&self) -> &ViewerSettings {
        &self.settings
    }

    fn set_settings(&mut self, settings: ViewerSettings) {
        self.settings = settings;
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
