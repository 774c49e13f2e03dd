//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging gesture
//! routing and panel state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panel=debug,message=debug` - scoped filtering
//! - `RUST_LOG=filter_gallery::panel=trace` - every drag frame
//!
//! # Log Files
//!
//! Logs are written to `~/.config/filter-gallery/logs/filter-gallery.log`
//! with daily rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::panel::{GeometrySink, PanelGestureController, SelectionStrip};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// the config dir's `logs/` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "filter-gallery.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of panel state for diffing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSnapshot {
    pub origin_y: f32,
    pub height: f32,
    pub scale: f32,
    pub right_inset: f32,
    pub dragging: bool,
    pub animating: bool,
}

impl PanelSnapshot {
    pub fn from_panel<G: GeometrySink, S: SelectionStrip>(
        panel: &PanelGestureController<G, S>,
    ) -> Self {
        let frame = panel.frame();
        let transform = panel.content_transform();
        Self {
            origin_y: frame.origin_y,
            height: frame.height,
            scale: transform.scale,
            right_inset: transform.right_inset,
            dragging: panel.drag_state().is_active(),
            animating: panel.is_animating(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.height != other.height || self.origin_y != other.origin_y {
            changes.push(format!(
                "frame: ({:.1}, h {:.1}) → ({:.1}, h {:.1})",
                self.origin_y, self.height, other.origin_y, other.height
            ));
        }
        if self.scale != other.scale || self.right_inset != other.right_inset {
            changes.push(format!(
                "content: (×{:.3}, inset {:.1}) → (×{:.3}, inset {:.1})",
                self.scale, self.right_inset, other.scale, other.right_inset
            ));
        }
        if self.dragging != other.dragging {
            changes.push(if other.dragging {
                "drag started".to_string()
            } else {
                "drag ended".to_string()
            });
        }
        if self.animating != other.animating {
            changes.push(if other.animating {
                "animation started".to_string()
            } else {
                "animation stopped".to_string()
            });
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
