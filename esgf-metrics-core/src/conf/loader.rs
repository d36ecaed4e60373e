use crate::conf::duration::parse_duration;
use crate::conf::error::ConfigError;
use crate::conf::types::{ConfigFile, MetricsConfig, PipelineSection};
use crate::period::parse_offset;
use crate::pipeline::PipelineConfig;
use crate::template::PathClassifier;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config/esgf-metrics.hcl";

pub fn load_config(path: &Path) -> Result<MetricsConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config = lower_config(&text, path)?;

    debug!(
        path = %path.display(),
        logs_root = %config.logs.root.display(),
        pattern = %config.logs.pattern,
        "loaded configuration"
    );

    Ok(config)
}

/// Parses and validates config text that did not come from a file.
pub fn parse_config(text: &str) -> Result<MetricsConfig, ConfigError> {
    lower_config(text, Path::new("<inline>"))
}

fn lower_config(text: &str, origin: &Path) -> Result<MetricsConfig, ConfigError> {
    let file: ConfigFile = hcl::from_str(text).map_err(|e| ConfigError::parse(origin, e))?;

    Ok(MetricsConfig {
        logs: file.logs,
        pipeline: lower_pipeline(file.pipeline)?,
    })
}

fn lower_pipeline(section: PipelineSection) -> Result<PipelineConfig, ConfigError> {
    let mut config = PipelineConfig::default();

    if let Some(root) = section.serving_root {
        // The classifier owns the rules for a valid root.
        PathClassifier::builtin(&root)
            .map_err(|_| ConfigError::InvalidServingRoot { root: root.clone() })?;
        config.serving_root = root;
    }

    if let Some(window) = section.dedup_window {
        config.dedup_window =
            parse_duration(&window).ok_or(ConfigError::InvalidDuration { value: window })?;
    }

    if let Some(offset) = section.reference_offset {
        config.reference_offset =
            parse_offset(&offset).ok_or(ConfigError::InvalidOffset { value: offset })?;
    }

    Ok(config)
}
