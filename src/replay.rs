//! Gesture trace replay
//!
//! A trace is a recorded sequence of gesture samples and panel actions. The
//! replayer feeds it through the same `update` loop a host would, against
//! recording collaborators, and reports where the panel ended up.
//!
//! ```yaml
//! viewport: { width: 375.0, height: 667.0 }
//! content_offset: 0.0
//! steps:
//!   - step: began
//!     location_y: 430.0
//!   - step: changed
//!     translation_y: 50.0
//!   - step: ended
//!     translation_y: 50.0
//!     velocity_y: 0.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::config::PanelConfig;
use crate::messages::{GestureMsg, Msg, PanelMsg};
use crate::model::AppModel;
use crate::panel::{
    CellSize, ContentTransform, GalleryLayout, PanelState, RecordingSink, RecordingStrip,
    SettleAction, Viewport,
};
use crate::update::update;

/// One recorded input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Began {
        location_y: f32,
    },
    Changed {
        translation_y: f32,
    },
    Ended {
        translation_y: f32,
        #[serde(default)]
        velocity_y: f32,
    },
    Cancelled {
        translation_y: f32,
    },
    Collapse,
    ShowMinimum,
    Expand,
    /// Let any running transition reach its end
    Settle,
    Reset,
}

impl Step {
    fn to_msg(self) -> Msg {
        match self {
            Step::Began { location_y } => Msg::Gesture(GestureMsg::began(location_y)),
            Step::Changed { translation_y } => Msg::Gesture(GestureMsg::changed(translation_y)),
            Step::Ended {
                translation_y,
                velocity_y,
            } => Msg::Gesture(GestureMsg::ended(translation_y, velocity_y)),
            Step::Cancelled { translation_y } => {
                Msg::Gesture(GestureMsg::cancelled(translation_y))
            }
            Step::Collapse => Msg::Panel(PanelMsg::Collapse),
            Step::ShowMinimum => Msg::Panel(PanelMsg::ShowMinimum),
            Step::Expand => Msg::Panel(PanelMsg::Expand),
            Step::Settle => Msg::Panel(PanelMsg::FinishAnimation),
            Step::Reset => Msg::Panel(PanelMsg::ResetLayout),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub viewport: Option<Viewport>,
    /// Strip cell size; derived from the gallery layout when absent
    #[serde(default)]
    pub cell_size: Option<CellSize>,
    #[serde(default)]
    pub content_offset: f32,
    pub steps: Vec<Step>,
}

impl Trace {
    /// Read a trace file. `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON trace {}", path.display()))
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML trace {}", path.display()))
        }
    }
}

/// Final panel state after a replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub frame: PanelState,
    pub content: ContentTransform,
    pub settled: Vec<SettleAction>,
    /// Steps that asked the host for a single redraw
    pub redraws: usize,
    /// Steps that started or continued a transition
    pub frames_scheduled: usize,
    pub frames_applied: usize,
    pub transforms_applied: usize,
}

/// Run `trace` through a fresh model built from `config`
pub fn run(trace: &Trace, config: PanelConfig) -> ReplayReport {
    let viewport = trace.viewport.unwrap_or_default();
    let cell = trace.cell_size.unwrap_or_else(|| {
        GalleryLayout::compute(viewport.width, config.resting_height(), &config).cell
    });

    let mut model = AppModel::new(
        config,
        viewport,
        RecordingSink::default(),
        RecordingStrip::new(cell, trace.content_offset),
    );

    let mut settled = Vec::new();
    let mut redraws = 0;
    let mut frames_scheduled = 0;
    for step in &trace.steps {
        tracing::trace!(?step, "replaying");
        match update(&mut model, step.to_msg()) {
            Some(Cmd::Redraw) => redraws += 1,
            Some(Cmd::ScheduleFrame) => frames_scheduled += 1,
            None => {}
        }
        settled.extend(model.last_settle.take());
    }
    model.panel.finish_animation();

    ReplayReport {
        frame: model.panel.frame(),
        content: model.panel.content_transform(),
        settled,
        redraws,
        frames_scheduled,
        frames_applied: model.panel.sink().frames_applied,
        transforms_applied: model.panel.strip().transforms_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_steps_parse() {
        let yaml = r#"
steps:
  - step: began
    location_y: 430.0
  - step: changed
    translation_y: 50.0
  - step: ended
    translation_y: 50.0
  - step: settle
"#;
        let trace: Trace = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(trace.steps.len(), 4);
        assert_eq!(
            trace.steps[2],
            Step::Ended {
                translation_y: 50.0,
                velocity_y: 0.0
            }
        );
        assert_eq!(trace.steps[3], Step::Settle);
    }

    #[test]
    fn test_replay_slow_drag_down_collapses() {
        let trace = Trace {
            viewport: Some(Viewport::new(375.0, 667.0)),
            cell_size: None,
            content_offset: 0.0,
            steps: vec![
                Step::Began { location_y: 430.0 },
                Step::Changed { translation_y: 50.0 },
                Step::Ended {
                    translation_y: 50.0,
                    velocity_y: 0.0,
                },
            ],
        };
        let report = run(&trace, PanelConfig::default());
        assert_eq!(report.settled, vec![SettleAction::Collapse]);
        assert_eq!(report.redraws, 1);
        assert_eq!(report.frames_scheduled, 1);
        assert_eq!(report.frame, PanelState::new(523.0, 24.0));
        assert!(report.content.is_identity());
    }
}
