//! Panel action handlers

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;
use crate::panel::{GeometrySink, SelectionStrip};

use super::frame_cmd;

/// Update function for programmatic panel messages
pub fn update_panel<G: GeometrySink, S: SelectionStrip>(
    model: &mut AppModel<G, S>,
    msg: PanelMsg,
) -> Option<Cmd> {
    match msg {
        PanelMsg::Collapse => {
            model.panel.collapse(None);
            Some(frame_cmd(model))
        }

        PanelMsg::ShowMinimum => {
            model.panel.show_minimum();
            Some(frame_cmd(model))
        }

        PanelMsg::Expand => {
            model.panel.expand();
            Some(frame_cmd(model))
        }

        PanelMsg::ResetLayout => {
            model.panel.reset_layout();
            Some(Cmd::Redraw)
        }

        PanelMsg::Resize(viewport) => {
            model.panel.set_viewport(viewport);
            Some(Cmd::Redraw)
        }

        PanelMsg::Tick => {
            if !model.panel.is_animating() {
                return None;
            }
            model.panel.tick(Instant::now());
            Some(frame_cmd(model))
        }

        PanelMsg::FinishAnimation => {
            if !model.panel.is_animating() {
                return None;
            }
            model.panel.finish_animation();
            Some(Cmd::Redraw)
        }
    }
}
