//! Drag session state and settle decisions

use serde::{Deserialize, Serialize};

use super::state::PanelState;

/// Baseline captured when a drag starts.
///
/// All later translations are interpreted against this snapshot, never
/// against the live panel frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub initial_frame: PanelState,
    pub initial_content_offset: f32,
    pub cell_width: f32,
    /// Index of the strip cell at the left edge when the drag started
    pub initial_cell_index: usize,
}

impl DragSession {
    pub fn new(initial_frame: PanelState, initial_content_offset: f32, cell_width: f32) -> Self {
        let initial_cell_index = if cell_width > 0.0 && initial_content_offset > 0.0 {
            (initial_content_offset / cell_width).floor() as usize
        } else {
            0
        };
        Self {
            initial_frame,
            initial_content_offset,
            cell_width,
            initial_cell_index,
        }
    }

    /// Height the panel would have if it followed the finger exactly
    pub fn candidate_height(&self, translation_y: f32) -> f32 {
        self.initial_frame.height - translation_y
    }
}

/// Whether a drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Active(DragSession),
}

impl DragState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Active(session) => Some(session),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Active(_))
    }

    /// Take the session out, leaving `Idle` behind
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Active(session) => Some(session),
        }
    }
}

/// Discrete outcome chosen when a drag is released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleAction {
    Collapse,
    ShowMinimum,
    Expand,
}

impl SettleAction {
    pub fn name(&self) -> &'static str {
        match self {
            SettleAction::Collapse => "collapse",
            SettleAction::ShowMinimum => "show_minimum",
            SettleAction::Expand => "expand",
        }
    }
}

/// Release decision table, first match wins:
///
/// | condition                                         | action        |
/// |---------------------------------------------------|---------------|
/// | `current_height < minimum` and `velocity_y < 0`   | `ShowMinimum` |
/// | `velocity_y < -fling`                             | `Expand`      |
/// | `velocity_y > fling` or `candidate < minimum`     | `Collapse`    |
/// | otherwise                                         | none          |
pub fn settle_action(
    current_height: f32,
    candidate_height: f32,
    velocity_y: f32,
    minimum_height: f32,
    fling_velocity: f32,
) -> Option<SettleAction> {
    if current_height < minimum_height && velocity_y < 0.0 {
        Some(SettleAction::ShowMinimum)
    } else if velocity_y < -fling_velocity {
        Some(SettleAction::Expand)
    } else if velocity_y > fling_velocity || candidate_height < minimum_height {
        Some(SettleAction::Collapse)
    } else {
        None
    }
}
