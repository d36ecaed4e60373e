use crate::cli::render::{render_json, render_pretty};
use crate::conf::{MetricsConfig, load_config};
use crate::inventory::{discover_logs, read_sources};
use crate::logging::OutputMode;
use crate::pipeline::{BatchOutcome, run_batch};
use anyhow::Context;
use std::path::Path;
use tracing::error;

pub const DEFAULT_TOP_CLIENTS: usize = 10;

/// `esgf-metrics run`: discover, read, aggregate and print.
pub fn run_metrics(config_path: &Path, mode: OutputMode, top: usize) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let outcome = collect_metrics(&config).inspect_err(|e| {
        error!(error = %format!("{e:#}"), "metrics run failed");
    })?;

    match mode {
        OutputMode::Json => println!("{}", render_json(&outcome, top)?),
        OutputMode::Pretty => print!("{}", render_pretty(&outcome, top)),
    }

    Ok(())
}

/// Runs the whole batch for the logs named by `config`.
pub fn collect_metrics(config: &MetricsConfig) -> anyhow::Result<BatchOutcome> {
    let files = discover_logs(&config.logs.root, &config.logs.pattern)?;
    let sources = read_sources(&files)?;

    run_batch(&sources, config.pipeline.clone())
        .with_context(|| format!("processing logs under {}", config.logs.root.display()))
}
