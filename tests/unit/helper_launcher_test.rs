//! Tests for the engine helper launcher: existence checks, the not-found
//! branch and non-blocking launch of a real child process.

use std::path::Path;
use std::time::{Duration, Instant};

use rbcad_viewer::services::helper_launcher::{
    helper_exists, HelperLauncher, HelperLauncherTrait,
};
use rbcad_viewer::types::errors::HelperError;
use rstest::rstest;
use tempfile::TempDir;

#[test]
fn test_helper_exists_tracks_filesystem_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine-helper");

    assert!(!helper_exists(&path));
    std::fs::write(&path, b"").unwrap();
    assert!(helper_exists(&path));
    std::fs::remove_file(&path).unwrap();
    assert!(!helper_exists(&path));
}

#[rstest]
#[case("")]
#[case("/")]
#[case("relative/engine-helper")]
#[case("/no/such/dir/engine-helper.exe")]
#[case("C:\\Users\\User\\QtWebEngineProcess.exe")]
fn test_helper_exists_never_panics(#[case] path: &str) {
    let _ = helper_exists(Path::new(path));
}

#[test]
fn test_missing_helper_returns_promptly() {
    let dir = TempDir::new().unwrap();
    let launcher = HelperLauncher::new(dir.path().join("missing-helper"));

    let start = Instant::now();
    let result = launcher.launch();

    assert!(start.elapsed() < Duration::from_secs(1));
    assert!(matches!(result, Err(HelperError::NotFound(_))));
}

/// Spawning tests hold this lock. Writing an executable while another
/// thread forks can fail the exec with ETXTBSY, and one test changes the
/// current directory.
#[cfg(unix)]
static SPAWN_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(unix)]
fn spawn_guard() -> std::sync::MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Writes an executable helper that sleeps until killed.
#[cfg(unix)]
fn write_sleeping_helper(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, "#!/bin/sh\nexec sleep 30\n").unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_launch_does_not_wait_for_helper() {
    let _guard = spawn_guard();
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("engine-helper");
    write_sleeping_helper(&script);

    let launcher = HelperLauncher::new(&script);
    assert!(launcher.helper_exists());

    let start = Instant::now();
    let mut process = launcher.launch().unwrap();
    assert!(
        start.elapsed() < Duration::from_secs(5),
        "launch must not wait for the helper to exit"
    );
    assert_eq!(process.path(), script.as_path());
    assert!(process.is_running());

    process.terminate().unwrap();
    assert!(!process.is_running());
}

#[cfg(unix)]
#[test]
fn test_bare_file_name_launches_file_in_current_dir() {
    let _guard = spawn_guard();
    let dir = TempDir::new().unwrap();
    write_sleeping_helper(&dir.path().join("local-engine-helper"));

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let launcher = HelperLauncher::new("local-engine-helper");
    let result = launcher.launch();
    std::env::set_current_dir(previous).unwrap();

    let mut process = result.expect("a helper that exists must be spawned");
    assert!(process.path().is_absolute());
    assert_eq!(process.path().file_name().unwrap(), "local-engine-helper");
    assert!(process.is_running());
    process.terminate().unwrap();
}

#[cfg(target_os = "linux")]
#[test]
fn test_dropping_handle_stops_helper() {
    let _guard = spawn_guard();
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("engine-helper");
    write_sleeping_helper(&script);

    let process = HelperLauncher::new(&script).launch().unwrap();
    let pid = process.id();
    assert!(Path::new(&format!("/proc/{}", pid)).exists());

    drop(process);

    assert!(!Path::new(&format!("/proc/{}", pid)).exists());
}

#[cfg(unix)]
#[test]
fn test_non_executable_helper_is_spawn_failure() {
    let _guard = spawn_guard();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine-helper");
    std::fs::write(&path, b"not a program").unwrap();

    let result = HelperLauncher::new(&path).launch();

    assert!(matches!(result, Err(HelperError::SpawnFailed(_))));
}
