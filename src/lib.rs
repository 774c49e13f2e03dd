//! Filter gallery - draggable bottom panel for a photo/video picker
//!
//! This crate provides the panel gesture controller, its collaborator
//! contracts, and an Elm-style message/update layer a host routes platform
//! gestures through.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod panel;
pub mod replay;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PanelConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use panel::PanelGestureController;
