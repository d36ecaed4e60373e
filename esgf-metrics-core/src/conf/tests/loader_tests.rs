use crate::conf::{ConfigError, DEFAULT_CONFIG_PATH, MetricsConfig, load_config, parse_config};
use crate::pipeline::PipelineConfig;
use chrono::FixedOffset;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn empty_file_yields_defaults() {
    // Act
    let config = parse_config("").unwrap();

    // Assert
    assert_eq!(config, MetricsConfig::default());
    assert_eq!(config.logs.root, PathBuf::from("access_logs"));
    assert_eq!(config.logs.pattern, "*/access_log*");
}

#[test]
fn full_file_overrides_every_field() {
    // Arrange
    let text = r#"
logs {
  root    = "/data/esgf/logs"
  pattern = "*/access_log-2019*"
}

pipeline {
  serving_root     = "/thredds/fileServer/other/"
  dedup_window     = "12h"
  reference_offset = "-07:00"
}
"#;

    // Act
    let config = parse_config(text).unwrap();

    // Assert
    assert_eq!(config.logs.root, PathBuf::from("/data/esgf/logs"));
    assert_eq!(config.logs.pattern, "*/access_log-2019*");
    assert_eq!(
        config.pipeline,
        PipelineConfig {
            serving_root: "/thredds/fileServer/other/".to_string(),
            dedup_window: Duration::from_secs(12 * 3600),
            reference_offset: FixedOffset::west_opt(7 * 3600).unwrap(),
        }
    );
}

#[test]
fn partial_block_keeps_remaining_defaults() {
    let config = parse_config(
        r#"
pipeline {
  dedup_window = "30m"
}
"#,
    )
    .unwrap();

    assert_eq!(config.pipeline.dedup_window, Duration::from_secs(1_800));
    assert_eq!(
        config.pipeline.serving_root,
        PipelineConfig::default().serving_root
    );
    assert_eq!(config.logs, MetricsConfig::default().logs);
}

#[test]
fn invalid_duration_is_rejected_with_hint() {
    let err = parse_config("pipeline {\n  dedup_window = \"a day\"\n}\n").unwrap_err();

    assert!(matches!(err, ConfigError::InvalidDuration { ref value } if value == "a day"));
    assert!(err.hint().is_some());
}

#[test]
fn invalid_offset_is_rejected() {
    let err = parse_config("pipeline {\n  reference_offset = \"PST\"\n}\n").unwrap_err();

    assert!(matches!(err, ConfigError::InvalidOffset { ref value } if value == "PST"));
}

#[test]
fn serving_root_must_be_slash_delimited() {
    let err = parse_config("pipeline {\n  serving_root = \"thredds\"\n}\n").unwrap_err();

    assert!(matches!(err, ConfigError::InvalidServingRoot { ref root } if root == "thredds"));
}

#[test]
fn unknown_fields_are_parse_errors() {
    let err = parse_config("pipeline {\n  dedup = \"1d\"\n}\n").unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_config_reads_from_disk() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("esgf-metrics.hcl");
    fs::write(&path, "logs {\n  root = \"/srv/logs\"\n}\n").unwrap();

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(config.logs.root, PathBuf::from("/srv/logs"));
}

#[test]
fn load_config_parse_error_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.hcl");
    fs::write(&path, "logs {\n  root = \n").unwrap();

    let err = load_config(&path).unwrap_err();

    match err {
        ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join(DEFAULT_CONFIG_PATH)).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.hint().is_some());
}
