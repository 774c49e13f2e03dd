//! Gesture routing
//!
//! Applies the activation-band hit test on `Began` and forwards the rest of
//! the gesture to the controller only if it passed. Cancellation settles the
//! panel like a release with zero velocity.

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::{GestureMsg, GesturePhase};
use crate::model::{AppModel, GestureRouting};
use crate::panel::{GeometrySink, SelectionStrip};
use crate::view::hit_test::{hit_test_panel, HitTarget};

use super::frame_cmd;

/// Update function for drag gesture samples
pub fn update_gesture<G: GeometrySink, S: SelectionStrip>(
    model: &mut AppModel<G, S>,
    msg: GestureMsg,
) -> Option<Cmd> {
    match msg.phase {
        GesturePhase::Began => {
            // A new gesture replaces whatever session the last one left behind
            if hit_test_panel(model, msg.location_y) == Some(HitTarget::PanelDragZone) {
                model.routing = GestureRouting::Routed;
                let was_animating = model.panel.is_animating();
                model.panel.begin_drag();
                was_animating.then_some(Cmd::Redraw)
            } else {
                debug!(location_y = msg.location_y, "gesture outside activation band");
                model.routing = GestureRouting::Dropped;
                None
            }
        }

        GesturePhase::Changed => {
            if model.routing != GestureRouting::Routed {
                return None;
            }
            let before = model.panel.frame();
            let (after, _) = model.panel.update_drag(msg.translation_y);
            (before != after).then_some(Cmd::Redraw)
        }

        GesturePhase::Ended => settle(model, msg.translation_y, msg.velocity_y, false),

        GesturePhase::Cancelled => settle(model, msg.translation_y, 0.0, true),
    }
}

fn settle<G: GeometrySink, S: SelectionStrip>(
    model: &mut AppModel<G, S>,
    translation_y: f32,
    velocity_y: f32,
    cancelled: bool,
) -> Option<Cmd> {
    let routing = std::mem::take(&mut model.routing);
    if routing != GestureRouting::Routed {
        return None;
    }

    let action = if cancelled {
        model.panel.cancel_drag(translation_y)
    } else {
        model.panel.end_drag(translation_y, velocity_y)
    };

    let action = action?;
    model.last_settle = Some(action);
    Some(frame_cmd(model))
}
