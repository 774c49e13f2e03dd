//! Capability contracts between the controller and the visual surface
//!
//! The controller owns one handle of each kind and only ever calls these
//! setters/getters; it never holds a reference back to whatever hosts it.

use super::state::{CellSize, ContentTransform, PanelState};

/// Receives panel frame updates. Setters must be cheap enough to call every
/// animation frame.
pub trait GeometrySink {
    fn set_frame(&mut self, frame: PanelState);

    /// Mirror of the strip transform for surfaces that render it themselves
    fn set_content_transform(&mut self, _transform: ContentTransform) {}
}

/// The horizontally paged filter strip inside the panel
pub trait SelectionStrip {
    /// Current item size, `None` until the strip has been laid out
    fn cell_size(&self) -> Option<CellSize>;

    /// Horizontal scroll offset of the strip
    fn content_offset(&self) -> f32;

    fn set_content_transform(&mut self, transform: ContentTransform);
}

/// Sink that remembers the last frame it was given
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub frame: Option<PanelState>,
    pub transform: Option<ContentTransform>,
    /// Number of `set_frame` calls
    pub frames_applied: usize,
}

impl GeometrySink for RecordingSink {
    fn set_frame(&mut self, frame: PanelState) {
        self.frame = Some(frame);
        self.frames_applied += 1;
    }

    fn set_content_transform(&mut self, transform: ContentTransform) {
        self.transform = Some(transform);
    }
}

/// Strip with a fixed cell size and scroll offset
#[derive(Debug, Clone, Default)]
pub struct RecordingStrip {
    pub cell: Option<CellSize>,
    pub offset: f32,
    pub transform: ContentTransform,
    /// Number of `set_content_transform` calls
    pub transforms_applied: usize,
}

impl RecordingStrip {
    pub fn new(cell: CellSize, offset: f32) -> Self {
        Self {
            cell: Some(cell),
            offset,
            ..Self::default()
        }
    }

    /// Strip that has not been laid out yet
    pub fn unmeasured() -> Self {
        Self::default()
    }
}

impl SelectionStrip for RecordingStrip {
    fn cell_size(&self) -> Option<CellSize> {
        self.cell
    }

    fn content_offset(&self) -> f32 {
        self.offset
    }

    fn set_content_transform(&mut self, transform: ContentTransform) {
        self.transform = transform;
        self.transforms_applied += 1;
    }
}
