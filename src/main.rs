//! RBCAD Viewer — opens the RBCAD web application in a desktop window.
//!
//! Entry point: resolves settings, launches the engine helper and runs the
//! window event loop. When built without the `gui` feature, prints the
//! resolved window plan and helper status instead.

use rbcad_viewer::app::App;
use rbcad_viewer::services::settings_engine::SettingsEngine;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = match App::new(SettingsEngine::new(None)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to initialize RBCAD Viewer: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(app) {
        eprintln!("RBCAD Viewer failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "gui")]
fn run(app: App) -> Result<(), Box<dyn std::error::Error>> {
    rbcad_viewer::ui::webview_app::run(app)
}

#[cfg(not(feature = "gui"))]
fn run(app: App) -> Result<(), Box<dyn std::error::Error>> {
    use rbcad_viewer::services::helper_launcher::{HelperLauncher, HelperLauncherTrait};

    let plan = app.window_plan()?;
    let bounds = plan.bounds();

    println!("RBCAD Viewer v{} (headless)", env!("CARGO_PKG_VERSION"));
    println!("  Title:  {}", plan.title());
    println!(
        "  Window: {}x{} at ({},{})",
        bounds.width, bounds.height, bounds.x, bounds.y
    );
    println!("  URL:    {}", plan.start_url());

    // No window to serve, so the helper is only located, never started.
    match &app.settings.helper_path {
        Some(path) => {
            let launcher = HelperLauncher::new(path);
            let state = if launcher.helper_exists() { "found" } else { "missing" };
            println!("  Helper: {} ({})", launcher.helper_path().display(), state);
        }
        None => println!("  Helper: disabled"),
    }

    Ok(())
}
