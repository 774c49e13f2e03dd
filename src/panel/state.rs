//! Panel geometry and content transform values
//!
//! These are plain `Copy` values: the controller owns the authoritative copy
//! and pushes snapshots to its collaborators.

use serde::{Deserialize, Serialize};

/// Size of the parent surface the panel is anchored in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // Portrait phone in points
        Self::new(375.0, 667.0)
    }
}

/// Vertical origin and height of the panel in parent coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelState {
    pub origin_y: f32,
    pub height: f32,
}

impl PanelState {
    pub fn new(origin_y: f32, height: f32) -> Self {
        Self { origin_y, height }
    }

    /// Panel of `height` sitting directly on top of the bottom bar
    pub fn anchored(viewport: Viewport, bottom_bar_height: f32, height: f32) -> Self {
        Self {
            origin_y: viewport.height - bottom_bar_height - height,
            height,
        }
    }

    /// Y coordinate of the panel's bottom edge
    pub fn bottom(&self) -> f32 {
        self.origin_y + self.height
    }

    pub fn lerp(&self, to: &PanelState, t: f32) -> PanelState {
        PanelState {
            origin_y: lerp(self.origin_y, to.origin_y, t),
            height: lerp(self.height, to.height, t),
        }
    }
}

/// Uniform scale and right content inset applied to the selection strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentTransform {
    pub scale: f32,
    pub right_inset: f32,
}

impl ContentTransform {
    pub const IDENTITY: ContentTransform = ContentTransform {
        scale: 1.0,
        right_inset: 0.0,
    };

    /// Scale the strip and widen its right inset so scaling does not clip
    /// the strip's right edge: `inset = width * (scale - 1) / scale`.
    pub fn scaled(scale: f32, panel_width: f32) -> Self {
        if scale == 1.0 {
            return Self::IDENTITY;
        }
        Self {
            scale,
            right_inset: panel_width * (scale - 1.0) / scale,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn lerp(&self, to: &ContentTransform, t: f32) -> ContentTransform {
        ContentTransform {
            scale: lerp(self.scale, to.scale, t),
            right_inset: lerp(self.right_inset, to.right_inset, t),
        }
    }
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Item size reported by the selection strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_sits_on_bottom_bar() {
        let state = PanelState::anchored(Viewport::new(375.0, 667.0), 120.0, 125.0);
        assert_eq!(state.origin_y, 422.0);
        assert_eq!(state.bottom(), 547.0);
    }

    #[test]
    fn test_scaled_identity_at_unit_scale() {
        assert!(ContentTransform::scaled(1.0, 375.0).is_identity());
    }

    #[test]
    fn test_scaled_inset_compensates_width() {
        let t = ContentTransform::scaled(2.0, 300.0);
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.right_inset, 150.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = PanelState::new(0.0, 24.0);
        let b = PanelState::new(100.0, 125.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }
}
