//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::{Deserialize, Serialize};

use crate::panel::Viewport;

/// Phase of a platform drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    /// Taken away by the platform (incoming call, competing recognizer)
    Cancelled,
}

/// One sample from the drag recognizer.
///
/// Translation and velocity are relative to the gesture's starting point;
/// positive values point down. `location_y` is the touch position in parent
/// coordinates and is only consulted for the activation-band hit test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureMsg {
    pub phase: GesturePhase,
    #[serde(default)]
    pub location_y: f32,
    #[serde(default)]
    pub translation_y: f32,
    #[serde(default)]
    pub velocity_y: f32,
}

impl GestureMsg {
    pub fn began(location_y: f32) -> Self {
        Self {
            phase: GesturePhase::Began,
            location_y,
            translation_y: 0.0,
            velocity_y: 0.0,
        }
    }

    pub fn changed(translation_y: f32) -> Self {
        Self {
            phase: GesturePhase::Changed,
            location_y: 0.0,
            translation_y,
            velocity_y: 0.0,
        }
    }

    pub fn ended(translation_y: f32, velocity_y: f32) -> Self {
        Self {
            phase: GesturePhase::Ended,
            location_y: 0.0,
            translation_y,
            velocity_y,
        }
    }

    pub fn cancelled(translation_y: f32) -> Self {
        Self {
            phase: GesturePhase::Cancelled,
            location_y: 0.0,
            translation_y,
            velocity_y: 0.0,
        }
    }
}

/// Programmatic panel actions and frame ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMsg {
    /// Animate down to the bar
    Collapse,
    /// Animate to the resting height, unscaled
    ShowMinimum,
    /// Animate to the resting height, strip scaled for the maximum height
    Expand,
    /// Jump the panel back to its initial layout
    ResetLayout,
    /// Parent surface changed size
    Resize(Viewport),
    /// Animation frame
    Tick,
    /// Skip to the end of the running transition
    FinishAnimation,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Gesture(GestureMsg),
    Panel(PanelMsg),
}
