//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.
//! An update with nothing to do returns `None` instead of a command.

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Geometry changed, redraw once
    Redraw,
    /// A transition is running: send `PanelMsg::Tick` on the next frame
    ScheduleFrame,
}
