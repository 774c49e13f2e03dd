//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use filter_gallery::config::PanelConfig;
use filter_gallery::model::AppModel;
use filter_gallery::panel::{
    CellSize, PanelGestureController, RecordingSink, RecordingStrip, Viewport,
};

pub const WIDTH: f32 = 375.0;
pub const HEIGHT: f32 = 667.0;
/// Panel top edge at rest: 667 - 120 - 125
pub const RESTING_ORIGIN: f32 = 422.0;
/// Panel top edge when collapsed: 667 - 120 - 24
pub const COLLAPSED_ORIGIN: f32 = 523.0;

pub type TestController = PanelGestureController<RecordingSink, RecordingStrip>;

pub fn viewport() -> Viewport {
    Viewport::new(WIDTH, HEIGHT)
}

/// Controller at rest with the reference config
pub fn test_controller() -> TestController {
    test_controller_with(PanelConfig::default())
}

pub fn test_controller_with(config: PanelConfig) -> TestController {
    PanelGestureController::new(
        config,
        viewport(),
        RecordingSink::default(),
        RecordingStrip::new(CellSize::square(101.0), 0.0),
    )
}

/// Config whose maximum is above the minimum, so the scale zone is reachable
pub fn tall_config() -> PanelConfig {
    PanelConfig {
        maximum_height: 226.0,
        ..PanelConfig::default()
    }
}

/// Host model at rest with the reference config
pub fn test_model() -> AppModel {
    AppModel::new(
        PanelConfig::default(),
        viewport(),
        RecordingSink::default(),
        RecordingStrip::new(CellSize::square(101.0), 0.0),
    )
}

/// Same as `test_model` but transitions finish on the first sample
pub fn instant_model() -> AppModel {
    AppModel::new(
        PanelConfig {
            animation_duration_ms: 0,
            ..PanelConfig::default()
        },
        viewport(),
        RecordingSink::default(),
        RecordingStrip::new(CellSize::square(101.0), 0.0),
    )
}
