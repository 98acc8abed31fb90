use std::fmt;

// === SettingsError ===

/// Errors related to loading and saving viewer settings.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === HelperError ===

/// Errors related to the engine helper process.
#[derive(Debug)]
pub enum HelperError {
    /// No executable exists at the given path.
    NotFound(String),
    /// The executable exists but the OS refused to start it.
    SpawnFailed(String),
    /// The running helper could not be stopped.
    TerminateFailed(String),
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelperError::NotFound(path) => write!(f, "Engine helper not found: {}", path),
            HelperError::SpawnFailed(msg) => write!(f, "Failed to start engine helper: {}", msg),
            HelperError::TerminateFailed(msg) => {
                write!(f, "Failed to stop engine helper: {}", msg)
            }
        }
    }
}

impl std::error::Error for HelperError {}

// === WindowError ===

/// Errors raised while planning or building the browser window.
#[derive(Debug)]
pub enum WindowError {
    /// The start address is not an absolute http(s) URL.
    InvalidUrl(String),
    /// Width or height is zero.
    InvalidGeometry(String),
    /// The native window could not be created.
    WindowCreation(String),
    /// The embedded web view could not be created.
    WebViewCreation(String),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::InvalidUrl(url) => write!(f, "Invalid start URL: {}", url),
            WindowError::InvalidGeometry(msg) => write!(f, "Invalid window geometry: {}", msg),
            WindowError::WindowCreation(msg) => write!(f, "Window creation failed: {}", msg),
            WindowError::WebViewCreation(msg) => write!(f, "WebView creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
