//! Panel configuration persistence
//!
//! Stores panel dimensions and gesture tuning in
//! `~/.config/filter-gallery/config.yaml`. Every value is independent: in
//! particular `minimum_height` and `maximum_height` stay separate even though
//! the shipped defaults make them equal.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Height of the collapsed bar (the grab handle strip)
pub const DEFAULT_BAR_HEIGHT: f32 = 24.0;
/// Resting height of the panel
pub const DEFAULT_MINIMUM_HEIGHT: f32 = 125.0;
/// Ceiling for drags; equal to the minimum in the reference layout
pub const DEFAULT_MAXIMUM_HEIGHT: f32 = 125.0;
/// Velocity (units/s) above which a release counts as a fling
pub const DEFAULT_FLING_VELOCITY: f32 = 100.0;
/// Distance above the panel's top edge where a drag may start
pub const DEFAULT_ACTIVATION_BAND: f32 = 25.0;
/// Height of the shutter/controls container below the panel
pub const DEFAULT_BOTTOM_BAR_HEIGHT: f32 = 120.0;
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;
pub const DEFAULT_INDICATOR_WIDTH: f32 = 41.0;
pub const DEFAULT_INDICATOR_HEIGHT: f32 = 8.0;
/// Strip height laid out while the panel is collapsed to the bar
pub const DEFAULT_COLLAPSED_STRIP_HEIGHT: f32 = 100.0;

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub bar_height: f32,
    pub minimum_height: f32,
    pub maximum_height: f32,
    pub fling_velocity: f32,
    pub activation_band: f32,
    pub bottom_bar_height: f32,
    pub animation_duration_ms: u64,
    pub indicator_width: f32,
    pub indicator_height: f32,
    pub collapsed_strip_height: f32,
    /// Lay the panel out collapsed to the bar on startup (small screens)
    pub start_collapsed: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            bar_height: DEFAULT_BAR_HEIGHT,
            minimum_height: DEFAULT_MINIMUM_HEIGHT,
            maximum_height: DEFAULT_MAXIMUM_HEIGHT,
            fling_velocity: DEFAULT_FLING_VELOCITY,
            activation_band: DEFAULT_ACTIVATION_BAND,
            bottom_bar_height: DEFAULT_BOTTOM_BAR_HEIGHT,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            indicator_width: DEFAULT_INDICATOR_WIDTH,
            indicator_height: DEFAULT_INDICATOR_HEIGHT,
            collapsed_strip_height: DEFAULT_COLLAPSED_STRIP_HEIGHT,
            start_collapsed: false,
        }
    }
}

impl PanelConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config.validate())
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Duration of the collapse/show/expand transitions
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Reject geometrically impossible dimensions.
    ///
    /// Requires finite values with `0 <= bar < minimum <= maximum` and a
    /// non-negative fling velocity; anything else falls back to the defaults
    /// as a whole.
    pub fn validate(self) -> Self {
        let finite = [
            self.bar_height,
            self.minimum_height,
            self.maximum_height,
            self.fling_velocity,
            self.activation_band,
            self.bottom_bar_height,
        ]
        .iter()
        .all(|v| v.is_finite());
        let heights_ok = finite
            && self.bar_height >= 0.0
            && self.bar_height < self.minimum_height
            && self.minimum_height <= self.maximum_height;
        if heights_ok && self.fling_velocity >= 0.0 && self.activation_band >= 0.0 {
            return self;
        }

        tracing::warn!(
            bar = self.bar_height,
            minimum = self.minimum_height,
            maximum = self.maximum_height,
            fling = self.fling_velocity,
            "Inconsistent panel dimensions, using defaults"
        );
        Self::default()
    }

    /// Height the panel rests at when first laid out
    pub fn resting_height(&self) -> f32 {
        if self.start_collapsed {
            self.bar_height
        } else {
            self.minimum_height
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_layout() {
        let config = PanelConfig::default();
        assert_eq!(config.bar_height, 24.0);
        assert_eq!(config.minimum_height, 125.0);
        assert_eq!(config.maximum_height, 125.0);
        assert_eq!(config.fling_velocity, 100.0);
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_validate_rejects_inverted_heights() {
        let config = PanelConfig {
            minimum_height: 200.0,
            maximum_height: 150.0,
            ..PanelConfig::default()
        };
        assert_eq!(config.validate(), PanelConfig::default());
    }

    #[test]
    fn test_validate_keeps_distinct_maximum() {
        let config = PanelConfig {
            maximum_height: 200.0,
            ..PanelConfig::default()
        };
        assert_eq!(config.clone().validate(), config);
    }

    #[test]
    fn test_validate_rejects_infinite_maximum() {
        let config: PanelConfig = serde_yaml::from_str("maximum_height: .inf\n").unwrap();
        assert!(config.maximum_height.is_infinite());
        assert_eq!(config.validate(), PanelConfig::default());
    }

    #[test]
    fn test_validate_rejects_nan_fling() {
        let config = PanelConfig {
            fling_velocity: f32::NAN,
            ..PanelConfig::default()
        };
        assert_eq!(config.validate(), PanelConfig::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: PanelConfig = serde_yaml::from_str("maximum_height: 180.0\n").unwrap();
        assert_eq!(config.maximum_height, 180.0);
        assert_eq!(config.bar_height, DEFAULT_BAR_HEIGHT);
    }

    #[test]
    fn test_resting_height() {
        let mut config = PanelConfig::default();
        assert_eq!(config.resting_height(), 125.0);
        config.start_collapsed = true;
        assert_eq!(config.resting_height(), 24.0);
    }
}
