//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod gesture;
mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::panel::{GeometrySink, SelectionStrip};

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use gesture::update_gesture;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<G: GeometrySink, S: SelectionStrip>(
    model: &mut AppModel<G, S>,
    msg: Msg,
) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<G: GeometrySink, S: SelectionStrip>(
    model: &mut AppModel<G, S>,
    msg: Msg,
) -> Option<Cmd> {
    match msg {
        Msg::Gesture(m) => gesture::update_gesture(model, m),
        Msg::Panel(m) => panel::update_panel(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel state and logs diffs. Animation ticks are
/// too frequent to log individually.
#[cfg(debug_assertions)]
fn update_traced<G: GeometrySink, S: SelectionStrip>(
    model: &mut AppModel<G, S>,
    msg: Msg,
) -> Option<Cmd> {
    use crate::messages::PanelMsg;

    let is_noisy = matches!(msg, Msg::Panel(PanelMsg::Tick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = PanelSnapshot::from_panel(&model.panel);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = PanelSnapshot::from_panel(&model.panel);
    if let Some(diff) = before.diff(&after) {
        if !is_noisy {
            debug!(target: "panel", %diff, "state changed");
        }
    }

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Gesture(m) => format!("Gesture::{:?}", m.phase),
        Msg::Panel(m) => format!("Panel::{:?}", m),
    }
}

/// Command for the controller's state after a geometry change
pub(crate) fn frame_cmd<G: GeometrySink, S: SelectionStrip>(model: &AppModel<G, S>) -> Cmd {
    if model.panel.is_animating() {
        Cmd::ScheduleFrame
    } else {
        Cmd::Redraw
    }
}
