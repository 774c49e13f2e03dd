//! Tests for config persistence and trace loading

mod common;

use std::fs;

use filter_gallery::config::PanelConfig;
use filter_gallery::config_paths;
use filter_gallery::panel::{PanelState, SettleAction, Viewport};
use filter_gallery::replay::{self, Step, Trace};
use tempfile::TempDir;

// ============================================================================
// Config files
// ============================================================================

#[test]
fn test_save_then_load_preserves_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = PanelConfig {
        maximum_height: 200.0,
        animation_duration_ms: 150,
        start_collapsed: true,
        ..PanelConfig::default()
    };

    config.save_to(&path).unwrap();
    let loaded = PanelConfig::load_from(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = PanelConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config"));
}

#[test]
fn test_load_malformed_yaml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "bar_height: [not, a, number]\n").unwrap();

    let err = PanelConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn test_load_inconsistent_dimensions_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "bar_height: 150.0\nminimum_height: 100.0\n").unwrap();

    assert_eq!(PanelConfig::load_from(&path).unwrap(), PanelConfig::default());
}

#[test]
fn test_config_paths_use_app_dir() {
    if let Some(file) = config_paths::config_file() {
        assert!(file.to_string_lossy().contains("filter-gallery"));
        assert!(file.ends_with("config.yaml"));
    }
    if let Some(logs) = config_paths::logs_dir() {
        assert!(logs.ends_with("logs"));
    }
}

// ============================================================================
// Traces
// ============================================================================

#[test]
fn test_json_trace_replays_to_collapsed_bar() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trace.json");
    fs::write(
        &path,
        r#"{
            "viewport": { "width": 375.0, "height": 667.0 },
            "steps": [
                { "step": "began", "location_y": 430.0 },
                { "step": "changed", "translation_y": 60.0 },
                { "step": "ended", "translation_y": 60.0, "velocity_y": 20.0 }
            ]
        }"#,
    )
    .unwrap();

    let trace = Trace::load(&path).unwrap();
    assert_eq!(trace.steps.len(), 3);
    assert_eq!(trace.viewport, Some(Viewport::new(375.0, 667.0)));

    let report = replay::run(&trace, PanelConfig::default());
    assert_eq!(report.frame, PanelState::new(523.0, 24.0));
    assert_eq!(report.settled, vec![SettleAction::Collapse]);
}

#[test]
fn test_yaml_trace_with_fling_up() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trace.yaml");
    fs::write(
        &path,
        "steps:\n  - step: collapse\n  - step: settle\n  - step: began\n    location_y: 530.0\n  - step: changed\n    translation_y: -40.0\n  - step: ended\n    translation_y: -40.0\n    velocity_y: -300.0\n",
    )
    .unwrap();

    let trace = Trace::load(&path).unwrap();
    assert_eq!(trace.steps[0], Step::Collapse);

    let report = replay::run(&trace, PanelConfig::default());
    assert_eq!(report.frame, PanelState::new(422.0, 125.0));
    assert_eq!(report.settled, vec![SettleAction::ShowMinimum]);
    assert!(report.content.is_identity());
}

#[test]
fn test_unknown_step_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trace.yaml");
    fs::write(&path, "steps:\n  - step: pinch\n").unwrap();

    assert!(Trace::load(&path).is_err());
}
