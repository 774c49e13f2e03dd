use anyhow::{Context, Result};
use clap::Parser;

use filter_gallery::cli::{CliArgs, OutputFormat};
use filter_gallery::config::PanelConfig;
use filter_gallery::replay::{self, Trace};

// ============================================================================
// MAIN - Entry point
// ============================================================================

fn main() -> Result<()> {
    filter_gallery::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => PanelConfig::load_from(path)?,
        None => PanelConfig::load(),
    };

    let mut trace = Trace::load(&args.trace)?;
    trace.viewport = args.viewport(trace.viewport);
    tracing::info!(
        steps = trace.steps.len(),
        trace = %args.trace.display(),
        "replaying trace"
    );

    let report = replay::run(&trace, config);

    let output = match args.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        }
        OutputFormat::Yaml => serde_yaml::to_string(&report).context("Failed to serialize report")?,
    };
    println!("{}", output);

    Ok(())
}
