//! Viewer window built with `tao` + `wry`.
//!
//! One top-level window, one web view filling it, one navigation request.
//! On Linux the view is packed into the window's GTK vbox; on other
//! platforms it is a child of the window itself.

use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop};
use tao::window::{Window, WindowBuilder};
use wry::{WebView, WebViewBuilder};

use crate::app::App;
use crate::types::errors::WindowError;
use crate::types::window::WindowPlan;

fn build_window(plan: &WindowPlan, event_loop: &EventLoop<()>) -> Result<Window, WindowError> {
    let bounds = plan.bounds();
    WindowBuilder::new()
        .with_title(plan.title())
        .with_position(LogicalPosition::new(bounds.x, bounds.y))
        .with_inner_size(LogicalSize::new(bounds.width, bounds.height))
        .build(event_loop)
        .map_err(|e| WindowError::WindowCreation(e.to_string()))
}

fn build_webview(plan: &WindowPlan, window: &Window) -> Result<WebView, WindowError> {
    let builder = WebViewBuilder::new()
        .with_url(plan.start_url())
        .with_devtools(plan.devtools());

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| WindowError::WebViewCreation("window has no GTK vbox".into()))?;
        builder.build_gtk(vbox)
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(window);

    webview.map_err(|e| WindowError::WebViewCreation(e.to_string()))
}

// ─── Main entry point ───

/// Builds the window and blocks in the event loop until it is closed.
///
/// Returns only if construction fails; a normal close exits the process
/// with status 0 after `App::shutdown`.
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    let plan = app.window_plan()?;

    app.startup();

    let event_loop = EventLoop::new();
    let window = build_window(&plan, &event_loop)?;
    let webview = build_webview(&plan, &window)?;
    log::info!("Loading {}", plan.start_url());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        // Owned by the loop so both live until exit.
        let _ = (&window, &webview);

        if let Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } = event
        {
            log::info!("Window closed");
            app.shutdown();
            *control_flow = ControlFlow::Exit;
        }
    })
}
