use crate::inventory::DEFAULT_LOG_PATTERN;
use crate::pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOGS_ROOT: &str = "access_logs";

/// Represents the config file as written. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub logs: LogsConfig,

    #[serde(default)]
    pub pipeline: PipelineSection,
}

/// Where the access logs live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogsConfig {
    #[serde(default = "default_logs_root")]
    pub root: PathBuf,

    /// Glob relative to `root`; the matched file's parent directory names
    /// the node.
    #[serde(default = "default_log_pattern")]
    pub pattern: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            root: default_logs_root(),
            pattern: default_log_pattern(),
        }
    }
}

/// Pipeline settings in their textual form, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PipelineSection {
    pub serving_root: Option<String>,
    pub dedup_window: Option<String>,
    pub reference_offset: Option<String>,
}

/// Fully validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsConfig {
    pub logs: LogsConfig,
    pub pipeline: PipelineConfig,
}

fn default_logs_root() -> PathBuf {
    PathBuf::from(DEFAULT_LOGS_ROOT)
}

fn default_log_pattern() -> String {
    DEFAULT_LOG_PATTERN.to_string()
}
