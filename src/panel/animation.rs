//! Single-slot transition animator
//!
//! There is never more than one transition in flight. Starting a new one
//! retargets from whatever is currently presented and runs the superseded
//! transition's completion right away (last write wins, no queue).

use std::fmt;
use std::time::{Duration, Instant};

use super::state::{ContentTransform, PanelState};

/// Continuation run once a transition finishes or is superseded
pub type Completion = Box<dyn FnOnce()>;

/// Everything a transition interpolates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub frame: PanelState,
    pub transform: ContentTransform,
}

impl Keyframe {
    pub fn new(frame: PanelState, transform: ContentTransform) -> Self {
        Self { frame, transform }
    }

    fn lerp(&self, to: &Keyframe, t: f32) -> Keyframe {
        Keyframe {
            frame: self.frame.lerp(&to.frame, t),
            transform: self.transform.lerp(&to.transform, t),
        }
    }
}

struct Transition {
    from: Keyframe,
    to: Keyframe,
    started: Instant,
    duration: Duration,
    completion: Option<Completion>,
}

impl Transition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn keyframe_at(&self, now: Instant) -> Keyframe {
        self.from.lerp(&self.to, ease_in_out(self.progress(now)))
    }

    fn complete(mut self) {
        if let Some(completion) = self.completion.take() {
            completion();
        }
    }
}

/// One sampled animation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub keyframe: Keyframe,
    pub finished: bool,
}

#[derive(Default)]
pub struct Animator {
    current: Option<Transition>,
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.current {
            Some(t) => f
                .debug_struct("Animator")
                .field("from", &t.from)
                .field("to", &t.to)
                .field("duration", &t.duration)
                .field("has_completion", &t.completion.is_some())
                .finish(),
            None => f.write_str("Animator(idle)"),
        }
    }
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Target of the in-flight transition
    pub fn target(&self) -> Option<Keyframe> {
        self.current.as_ref().map(|t| t.to)
    }

    /// Value presented at `now`, if a transition is in flight
    pub fn presented(&self, now: Instant) -> Option<Keyframe> {
        self.current.as_ref().map(|t| t.keyframe_at(now))
    }

    /// Start a transition, replacing any in-flight one
    pub fn start(
        &mut self,
        from: Keyframe,
        to: Keyframe,
        duration: Duration,
        completion: Option<Completion>,
        now: Instant,
    ) {
        if let Some(previous) = self.current.take() {
            tracing::trace!("retargeting in-flight transition");
            previous.complete();
        }
        self.current = Some(Transition {
            from,
            to,
            started: now,
            duration,
            completion,
        });
    }

    /// Sample the transition at `now`. A finished transition is removed and
    /// its completion runs before this returns.
    pub fn sample(&mut self, now: Instant) -> Option<AnimationFrame> {
        let transition = self.current.as_ref()?;
        let finished = transition.progress(now) >= 1.0;
        let keyframe = if finished {
            transition.to
        } else {
            transition.keyframe_at(now)
        };

        if finished {
            if let Some(done) = self.current.take() {
                done.complete();
            }
        }
        Some(AnimationFrame { keyframe, finished })
    }

    /// Jump to the end of the in-flight transition
    pub fn finish(&mut self) -> Option<Keyframe> {
        let done = self.current.take()?;
        let target = done.to;
        done.complete();
        Some(target)
    }
}

/// Smoothstep ease-in-out on `[0, 1]`
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
