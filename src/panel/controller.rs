//! Drag/fling/tap controller for the filter-gallery panel
//!
//! The controller owns the panel's model geometry (what the panel *is*),
//! the current drag session, and a single-slot animator for what the panel
//! *presents* while a transition runs. Model values jump to their target as
//! soon as an animated action starts, so reads during an animation see the
//! destination.

use std::time::Instant;

use tracing::{debug, trace};

use crate::config::PanelConfig;

use super::animation::{Animator, Completion, Keyframe};
use super::collaborators::{GeometrySink, SelectionStrip};
use super::drag::{settle_action, DragSession, DragState, SettleAction};
use super::state::{ContentTransform, PanelState, Viewport};

#[derive(Debug)]
pub struct PanelGestureController<G: GeometrySink, S: SelectionStrip> {
    config: PanelConfig,
    viewport: Viewport,
    frame: PanelState,
    transform: ContentTransform,
    drag: DragState,
    animator: Animator,
    sink: G,
    strip: S,
}

impl<G: GeometrySink, S: SelectionStrip> PanelGestureController<G, S> {
    /// Create a controller and lay the panel out at its resting height
    pub fn new(config: PanelConfig, viewport: Viewport, sink: G, strip: S) -> Self {
        let frame = PanelState::anchored(viewport, config.bottom_bar_height, config.resting_height());
        let mut controller = Self {
            config,
            viewport,
            frame,
            transform: ContentTransform::IDENTITY,
            drag: DragState::Idle,
            animator: Animator::new(),
            sink,
            strip,
        };
        controller.reset_layout();
        controller
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn frame(&self) -> PanelState {
        self.frame
    }

    pub fn content_transform(&self) -> ContentTransform {
        self.transform
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn sink(&self) -> &G {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut G {
        &mut self.sink
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn is_collapsed(&self) -> bool {
        self.frame.height == self.config.bar_height
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Put the panel back at its resting height with an identity transform,
    /// without animating. Any drag or transition in flight is dropped.
    pub fn reset_layout(&mut self) {
        self.animator.finish();
        self.drag = DragState::Idle;
        self.frame = self.anchored(self.config.resting_height());
        self.transform = ContentTransform::IDENTITY;
        self.apply_frame(self.frame);
        self.apply_transform(self.transform);
    }

    /// Re-anchor the panel after the parent surface changed size, keeping
    /// its current height. A drag in progress is rebased onto the new
    /// surface so later translations stay anchored to the bottom bar.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.finish_animation();
        self.viewport = viewport;
        self.frame = self.anchored(self.frame.height);
        if let DragState::Active(session) = &mut self.drag {
            session.initial_frame = PanelState::anchored(
                viewport,
                self.config.bottom_bar_height,
                session.initial_frame.height,
            );
            debug!(origin_y = session.initial_frame.origin_y, "drag session rebased");
        }
        self.apply_frame(self.frame);
    }

    fn anchored(&self, height: f32) -> PanelState {
        PanelState::anchored(self.viewport, self.config.bottom_bar_height, height)
    }

    // ------------------------------------------------------------------
    // Drag gesture
    // ------------------------------------------------------------------

    /// Capture the drag baseline.
    ///
    /// The caller must already have checked that the touch started inside
    /// the activation band. Returns `None` (and stays idle) when the strip
    /// has not reported a cell size yet.
    pub fn begin_drag(&mut self) -> Option<DragSession> {
        let Some(cell) = self.strip.cell_size() else {
            debug!("drag ignored: selection strip has no cell size");
            return None;
        };

        // A new drag takes over from any transition still running
        self.finish_animation();

        let session = DragSession::new(self.frame, self.strip.content_offset(), cell.width);
        if self.drag.is_active() {
            debug!("replacing stale drag session");
        }
        self.drag = DragState::Active(session);
        debug!(
            height = session.initial_frame.height,
            offset = session.initial_content_offset,
            cell_index = session.initial_cell_index,
            "drag began"
        );
        Some(session)
    }

    /// Map one drag frame to panel geometry.
    ///
    /// `candidate = initial.height - translation_y`, first match wins:
    /// 1. `candidate >= maximum`: saturated, nothing changes
    /// 2. `candidate <= bar`: pinned to the bar, identity transform
    /// 3. `candidate >= minimum`: follows the finger and rescales the strip
    /// 4. otherwise: follows the finger, strip transform left as it was
    pub fn update_drag(&mut self, translation_y: f32) -> (PanelState, ContentTransform) {
        let Some(session) = self.drag.session().copied() else {
            debug!("drag update ignored: no active session");
            return (self.frame, self.transform);
        };
        if !translation_y.is_finite() {
            debug!(translation_y, "drag update ignored: non-finite translation");
            return (self.frame, self.transform);
        }

        let bar = self.config.bar_height;
        let minimum = self.config.minimum_height;
        let candidate = session.candidate_height(translation_y);

        if candidate >= self.config.maximum_height {
            trace!(candidate, "drag saturated at maximum");
            return (self.frame, self.transform);
        }

        if candidate <= bar {
            self.frame = self.anchored(bar);
            self.transform = ContentTransform::IDENTITY;
            self.apply_frame(self.frame);
            self.apply_transform(self.transform);
        } else if candidate >= minimum {
            let scale = (candidate - bar) / (minimum - bar);
            self.frame = PanelState::new(session.initial_frame.origin_y + translation_y, candidate);
            self.transform = ContentTransform::scaled(scale, self.viewport.width);
            self.apply_frame(self.frame);
            self.apply_transform(self.transform);
        } else {
            self.frame = PanelState::new(session.initial_frame.origin_y + translation_y, candidate);
            self.apply_frame(self.frame);
        }

        trace!(
            candidate,
            height = self.frame.height,
            scale = self.transform.scale,
            "drag update"
        );
        (self.frame, self.transform)
    }

    /// Release the drag and settle the panel.
    ///
    /// The session is discarded whatever the outcome.
    pub fn end_drag(&mut self, translation_y: f32, velocity_y: f32) -> Option<SettleAction> {
        let Some(session) = self.drag.take() else {
            debug!("drag end ignored: no active session");
            return None;
        };

        // Non-finite samples settle from where the panel already is
        let candidate = if translation_y.is_finite() {
            session.candidate_height(translation_y)
        } else {
            self.frame.height
        };
        let velocity_y = if velocity_y.is_finite() { velocity_y } else { 0.0 };

        let action = settle_action(
            self.frame.height,
            candidate,
            velocity_y,
            self.config.minimum_height,
            self.config.fling_velocity,
        );
        debug!(
            height = self.frame.height,
            velocity_y,
            action = action.map(|a| a.name()).unwrap_or("none"),
            "drag ended"
        );

        match action {
            Some(SettleAction::Collapse) => self.collapse(None),
            Some(SettleAction::ShowMinimum) => self.show_minimum(),
            Some(SettleAction::Expand) => self.expand(),
            None => {}
        }
        action
    }

    /// A gesture cancelled by the platform settles like a release at rest
    pub fn cancel_drag(&mut self, translation_y: f32) -> Option<SettleAction> {
        self.end_drag(translation_y, 0.0)
    }

    // ------------------------------------------------------------------
    // Animated actions
    // ------------------------------------------------------------------

    /// Animate down to the bar. `completion` runs once the transition ends
    /// or is superseded by another one.
    pub fn collapse(&mut self, completion: Option<Completion>) {
        self.animate_to(
            self.config.bar_height,
            ContentTransform::IDENTITY,
            completion,
        );
    }

    /// Animate to the resting height with an unscaled strip
    pub fn show_minimum(&mut self) {
        self.animate_to(self.config.minimum_height, ContentTransform::IDENTITY, None);
    }

    /// Animate to the resting height with the strip scaled for the maximum
    /// height. With `maximum == minimum` this is the same as `show_minimum`.
    pub fn expand(&mut self) {
        let PanelConfig {
            bar_height,
            minimum_height,
            maximum_height,
            ..
        } = self.config;
        let scale = (maximum_height - bar_height) / (minimum_height - bar_height);
        let transform = ContentTransform::scaled(scale, self.viewport.width);
        self.animate_to(minimum_height, transform, None);
    }

    /// Advance the running transition and push the presented values.
    /// Returns whether a transition is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(step) = self.animator.sample(now) {
            self.apply_frame(step.keyframe.frame);
            self.apply_transform(step.keyframe.transform);
            if step.finished {
                trace!(height = step.keyframe.frame.height, "transition finished");
            }
        }
        self.animator.is_running()
    }

    /// Jump the running transition (if any) to its end
    pub fn finish_animation(&mut self) {
        if let Some(target) = self.animator.finish() {
            self.apply_frame(target.frame);
            self.apply_transform(target.transform);
        }
    }

    fn animate_to(&mut self, height: f32, transform: ContentTransform, completion: Option<Completion>) {
        let now = Instant::now();
        let from = self
            .animator
            .presented(now)
            .unwrap_or_else(|| Keyframe::new(self.frame, self.transform));

        self.frame = self.anchored(height);
        self.transform = transform;
        let to = Keyframe::new(self.frame, self.transform);

        debug!(from = from.frame.height, to = height, scale = transform.scale, "animating panel");
        self.animator
            .start(from, to, self.config.animation_duration(), completion, now);
        self.tick(now);
    }

    // ------------------------------------------------------------------
    // Collaborator output
    // ------------------------------------------------------------------

    fn apply_frame(&mut self, frame: PanelState) {
        self.sink.set_frame(frame);
    }

    fn apply_transform(&mut self, transform: ContentTransform) {
        self.strip.set_content_transform(transform);
        self.sink.set_content_transform(transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::collaborators::{RecordingSink, RecordingStrip};
    use crate::panel::state::CellSize;

    fn controller() -> PanelGestureController<RecordingSink, RecordingStrip> {
        PanelGestureController::new(
            PanelConfig::default(),
            Viewport::new(375.0, 667.0),
            RecordingSink::default(),
            RecordingStrip::new(CellSize::square(101.0), 0.0),
        )
    }

    #[test]
    fn test_new_lays_out_at_resting_height() {
        let c = controller();
        assert_eq!(c.frame(), PanelState::new(422.0, 125.0));
        assert_eq!(c.sink().frame, Some(PanelState::new(422.0, 125.0)));
        assert!(c.strip().transform.is_identity());
    }

    #[test]
    fn test_begin_drag_captures_baseline() {
        let mut c = controller();
        c.strip_mut().offset = 303.0;
        let session = c.begin_drag().unwrap();
        assert_eq!(session.initial_frame, c.frame());
        assert_eq!(session.initial_content_offset, 303.0);
        assert_eq!(session.initial_cell_index, 3);
        assert!(c.drag_state().is_active());
    }

    #[test]
    fn test_begin_drag_without_cell_size_is_ignored() {
        let mut c = PanelGestureController::new(
            PanelConfig::default(),
            Viewport::default(),
            RecordingSink::default(),
            RecordingStrip::unmeasured(),
        );
        assert!(c.begin_drag().is_none());
        let before = c.frame();
        c.update_drag(60.0);
        assert_eq!(c.frame(), before);
    }

    #[test]
    fn test_end_drag_discards_session() {
        let mut c = controller();
        c.begin_drag();
        c.update_drag(10.0);
        c.end_drag(10.0, 0.0);
        assert_eq!(*c.drag_state(), DragState::Idle);
        assert_eq!(c.end_drag(10.0, 0.0), None);
    }

    #[test]
    fn test_tick_converges_to_target() {
        let mut c = controller();
        c.collapse(None);
        assert!(c.is_animating());
        let running = c.tick(Instant::now() + c.config().animation_duration());
        assert!(!running);
        assert_eq!(c.sink().frame, Some(PanelState::new(523.0, 24.0)));
    }
}
