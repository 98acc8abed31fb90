// RBCAD Viewer Helper Launcher
// Best-effort start of the auxiliary engine process before the window opens.
// The child is owned by a `HelperProcess` handle and stopped on shutdown.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::types::errors::HelperError;

/// Trait defining the helper launcher interface.
pub trait HelperLauncherTrait {
    fn helper_path(&self) -> &Path;
    fn helper_exists(&self) -> bool;
    fn launch(&self) -> Result<HelperProcess, HelperError>;
}

/// Returns true iff something exists at `path`. Never panics.
pub fn helper_exists(path: &Path) -> bool {
    path.exists()
}

/// Launches the engine helper found at a fixed path.
pub struct HelperLauncher {
    path: PathBuf,
}

impl HelperLauncher {
    /// Relative paths are resolved against the current directory here, so the
    /// existence check and the spawn always refer to the same file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        Self { path }
    }
}

impl HelperLauncherTrait for HelperLauncher {
    fn helper_path(&self) -> &Path {
        &self.path
    }

    fn helper_exists(&self) -> bool {
        helper_exists(&self.path)
    }

    /// Starts the helper without waiting for it.
    ///
    /// When the path is missing a single diagnostic line goes to stdout and
    /// `HelperError::NotFound` is returned. Any other spawn failure is
    /// returned as `HelperError::SpawnFailed`.
    fn launch(&self) -> Result<HelperProcess, HelperError> {
        if !self.helper_exists() {
            println!("Engine helper not found: {}", self.path.display());
            return Err(HelperError::NotFound(self.path.display().to_string()));
        }

        let child = Command::new(&self.path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| HelperError::SpawnFailed(format!("{}: {}", self.path.display(), e)))?;

        log::info!("Started engine helper {} (pid {})", self.path.display(), child.id());
        Ok(HelperProcess {
            child,
            path: self.path.clone(),
        })
    }
}

/// A running engine helper. Dropping the handle stops the process.
#[derive(Debug)]
pub struct HelperProcess {
    child: Child,
    path: PathBuf,
}

impl HelperProcess {
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Polls the child without blocking.
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Kills and reaps the child. A helper that already exited is not an error.
    pub fn terminate(&mut self) -> Result<(), HelperError> {
        match self.child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("Engine helper {} already exited: {}", self.id(), status);
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => return Err(HelperError::TerminateFailed(e.to_string())),
        }

        self.child
            .kill()
            .map_err(|e| HelperError::TerminateFailed(e.to_string()))?;
        self.child
            .wait()
            .map_err(|e| HelperError::TerminateFailed(e.to_string()))?;
        log::info!("Stopped engine helper (pid {})", self.id());
        Ok(())
    }
}

impl Drop for HelperProcess {
    fn drop(&mut self) {
        if let Err(e) = self.terminate() {
            log::warn!("{}", e);
        }
    }
}
