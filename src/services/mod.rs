// RBCAD Viewer services

pub mod helper_launcher;
pub mod settings_engine;
