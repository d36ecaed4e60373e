use esgf_metrics_core::pipeline::{LogSource, PipelineConfig, run_batch};
use integration_tests::harness::fixtures::NATIVE_PATH;
use integration_tests::harness::{CapturedEvent, access_line, captured_events};
use tracing::Level;

fn events_for(node: &str) -> Vec<CapturedEvent> {
    captured_events()
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.field("node") == Some(node))
        .cloned()
        .collect()
}

#[test]
fn per_source_summary_is_logged_at_info() {
    // Arrange
    let _events = captured_events();
    let node = "logging-summary-node";
    let source = LogSource::new(
        node,
        "access_log-20190922",
        vec![access_line("1.2.3.4", "22/Sep/2019:12:00:00 +0000", "GET", NATIVE_PATH, 200, "10")],
    );

    // Act
    run_batch(&[source], PipelineConfig::default()).unwrap();

    // Assert
    let summary: Vec<CapturedEvent> = events_for(node)
        .into_iter()
        .filter(|e| e.message() == Some("processed log source"))
        .collect();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].level, Level::INFO);
    assert_eq!(summary[0].field("lines"), Some("1"));
    assert_eq!(summary[0].field("source"), Some("access_log-20190922"));
}

#[test]
fn excluded_lines_are_logged_at_debug_with_their_kind() {
    let _events = captured_events();
    let node = "logging-exclusion-node";
    let source = LogSource::new(
        node,
        "access_log-20190922",
        vec![
            "garbage".to_string(),
            access_line("1.2.3.4", "22/Sep/2019:12:00:00 +0000", "GET", "nowhere/file.nc", 200, "10"),
        ],
    );

    run_batch(&[source], PipelineConfig::default()).unwrap();

    let kinds: Vec<String> = events_for(node)
        .into_iter()
        .filter(|e| e.message() == Some("line excluded"))
        .inspect(|e| assert_eq!(e.level, Level::DEBUG))
        .filter_map(|e| e.field("kind").map(str::to_string))
        .collect();
    assert_eq!(kinds, vec!["malformed".to_string(), "unrecognized_path".to_string()]);
}
