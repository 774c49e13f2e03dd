//! Sub-frame layout of the gallery panel
//!
//! The panel is a separator bar (with a centred grab indicator) on top of
//! the filter strip. Cells are square and as tall as the strip.

use crate::config::PanelConfig;

use super::state::CellSize;

/// Axis-aligned rectangle in panel-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Frames of the panel's children for a given panel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryLayout {
    pub separator: Rect,
    pub indicator: Rect,
    pub strip: Rect,
    pub cell: CellSize,
}

impl GalleryLayout {
    pub fn compute(panel_width: f32, panel_height: f32, config: &PanelConfig) -> Self {
        let bar = config.bar_height;
        // A collapsed panel still lays the strip out at a usable size so it
        // is ready when the panel grows again.
        let content_height = if panel_height == bar {
            config.collapsed_strip_height + bar
        } else {
            panel_height
        };

        let separator = Rect::new(0.0, 0.0, panel_width, bar);
        let indicator = Rect::new(
            (panel_width - config.indicator_width) / 2.0,
            (bar - config.indicator_height) / 2.0,
            config.indicator_width,
            config.indicator_height,
        );
        let strip_height = (content_height - bar).max(0.0);
        let strip = Rect::new(0.0, bar, panel_width, strip_height);

        Self {
            separator,
            indicator,
            strip,
            cell: CellSize::square(strip_height),
        }
    }
}
