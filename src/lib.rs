//! RBCAD Viewer — a single-window desktop shell around the RBCAD web application.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
