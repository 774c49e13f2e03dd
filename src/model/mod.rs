//! Application model - the host side of the panel
//!
//! The host owns the controller (which in turn owns its collaborator
//! handles) and remembers whether the gesture currently in progress passed
//! the activation-band hit test.

use crate::config::PanelConfig;
use crate::panel::{
    GeometrySink, PanelGestureController, RecordingSink, RecordingStrip, SelectionStrip,
    SettleAction, Viewport,
};

/// Whether samples of the current gesture reach the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureRouting {
    /// No gesture in progress
    #[default]
    Idle,
    /// `Began` was inside the activation band; samples go to the controller
    Routed,
    /// `Began` missed the band; every later sample is dropped
    Dropped,
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel<G: GeometrySink = RecordingSink, S: SelectionStrip = RecordingStrip> {
    pub panel: PanelGestureController<G, S>,
    pub routing: GestureRouting,
    /// Action taken by the most recent release, until the host takes it
    pub last_settle: Option<SettleAction>,
}

impl<G: GeometrySink, S: SelectionStrip> AppModel<G, S> {
    pub fn new(config: PanelConfig, viewport: Viewport, sink: G, strip: S) -> Self {
        Self {
            panel: PanelGestureController::new(config, viewport, sink, strip),
            routing: GestureRouting::Idle,
            last_settle: None,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        self.panel.config()
    }
}
