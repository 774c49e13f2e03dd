//! Command-line argument parsing for the trace replayer
//!
//! Supports:
//! - Replaying a YAML or JSON gesture trace
//! - Overriding the panel config file
//! - Overriding the parent surface size
//! - JSON or YAML output

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::panel::Viewport;

/// Replay drag gestures through the filter-gallery panel controller
#[derive(Parser, Debug)]
#[command(name = "filter-gallery", version, about = "Replay panel gesture traces")]
pub struct CliArgs {
    /// Trace file to replay (.json, or YAML otherwise)
    #[arg(value_name = "TRACE")]
    pub trace: PathBuf,

    /// Panel config file (defaults to the user config)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for the final report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Parent surface width, overriding the trace
    #[arg(long, value_name = "W")]
    pub width: Option<f32>,

    /// Parent surface height, overriding the trace
    #[arg(long, value_name = "H")]
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl CliArgs {
    /// Apply `--width`/`--height` on top of the trace's viewport
    pub fn viewport(&self, from_trace: Option<Viewport>) -> Option<Viewport> {
        if self.width.is_none() && self.height.is_none() {
            return from_trace;
        }
        let base = from_trace.unwrap_or_default();
        Some(Viewport::new(
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
        ))
    }
}
