//! Benchmarks for the per-frame drag path
//!
//! Run with: cargo bench drag

use filter_gallery::config::PanelConfig;
use filter_gallery::messages::{GestureMsg, Msg};
use filter_gallery::model::AppModel;
use filter_gallery::panel::{
    settle_action, CellSize, PanelGestureController, RecordingSink, RecordingStrip, Viewport,
};
use filter_gallery::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn tall_config() -> PanelConfig {
    PanelConfig {
        maximum_height: 226.0,
        ..PanelConfig::default()
    }
}

fn controller(config: PanelConfig) -> PanelGestureController<RecordingSink, RecordingStrip> {
    PanelGestureController::new(
        config,
        Viewport::new(375.0, 667.0),
        RecordingSink::default(),
        RecordingStrip::new(CellSize::square(101.0), 0.0),
    )
}

// ============================================================================
// Controller
// ============================================================================

/// One drag sweeping through every zone: scale, dead zone, pinned, saturated
#[divan::bench(args = [60, 240, 1000])]
fn update_drag_sweep(frames: usize) {
    let mut c = controller(tall_config());
    c.begin_drag();
    let step = 400.0 / frames as f32;
    for i in 0..frames {
        let translation = -150.0 + step * i as f32;
        divan::black_box(c.update_drag(divan::black_box(translation)));
    }
}

#[divan::bench]
fn settle_decision() {
    for v in [-500.0_f32, -150.0, -20.0, 0.0, 20.0, 150.0, 500.0] {
        divan::black_box(settle_action(
            divan::black_box(90.0),
            divan::black_box(90.0),
            v,
            125.0,
            100.0,
        ));
    }
}

// ============================================================================
// Full update loop
// ============================================================================

#[divan::bench(args = [60, 240])]
fn routed_gesture(frames: usize) {
    let mut model = AppModel::new(
        PanelConfig::default(),
        Viewport::new(375.0, 667.0),
        RecordingSink::default(),
        RecordingStrip::new(CellSize::square(101.0), 0.0),
    );
    update(&mut model, Msg::Gesture(GestureMsg::began(430.0)));
    for i in 0..frames {
        let translation = i as f32 * 0.5;
        divan::black_box(update(
            &mut model,
            Msg::Gesture(GestureMsg::changed(translation)),
        ));
    }
    divan::black_box(update(
        &mut model,
        Msg::Gesture(GestureMsg::ended(frames as f32 * 0.5, 0.0)),
    ));
}
