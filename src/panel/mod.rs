//! Filter-gallery panel - the draggable bottom sheet above the shutter bar
//!
//! ## Architecture
//!
//! - `PanelState` / `ContentTransform`: geometry values pushed to the surface
//! - `DragSession` / `DragState`: baseline captured when a drag begins
//! - `SettleAction`: collapse / show / expand decision on release
//! - `PanelGestureController`: owns all of the above plus the animator
//! - `GeometrySink` / `SelectionStrip`: capability traits for the visual
//!   surface; the controller owns its handles and never calls back into its
//!   host
//! - `GalleryLayout`: frames of the separator, grab indicator and strip
//!
//! ## Integration
//!
//! The host routes gestures through `update::update` (see
//! `view::hit_test::in_activation_band` for the hit test applied before a
//! drag reaches the controller) and calls `PanelMsg::Tick` every frame while
//! `Cmd::ScheduleFrame` is returned.

pub mod animation;
pub mod collaborators;
mod controller;
mod drag;
pub mod layout;
mod state;

pub use animation::{Animator, Completion, Keyframe};
pub use collaborators::{GeometrySink, RecordingSink, RecordingStrip, SelectionStrip};
pub use controller::PanelGestureController;
pub use drag::{settle_action, DragSession, DragState, SettleAction};
pub use layout::GalleryLayout;
pub use state::{CellSize, ContentTransform, PanelState, Viewport};
