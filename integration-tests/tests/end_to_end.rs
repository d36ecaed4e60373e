use esgf_metrics_core::aggregate::BucketKey;
use esgf_metrics_core::cli::collect_metrics;
use esgf_metrics_core::conf::load_config;
use esgf_metrics_core::diagnostics::FailureKind;
use esgf_metrics_core::period::Quarter;
use integration_tests::harness::LogTree;
use integration_tests::harness::access_line;
use integration_tests::harness::fixtures::{CMIP6_PATH, NATIVE_PATH, VARIABLES_PATH};
use pretty_assertions::assert_eq;

fn q(year: i32, quarter: u8) -> Quarter {
    Quarter::new(year, quarter).unwrap()
}

/// Two nodes, three quarters with a gap in between, and one of every
/// exclusion kind.
fn populated_tree() -> LogTree {
    let tree = LogTree::new();

    tree.write_log(
        "esgf-data1",
        "access_log-20190922",
        &[
            access_line("123.1.1.1", "22/Sep/2019:12:01:01 -0700", "GET", NATIVE_PATH, 200, "91564624"),
            access_line("123.1.1.1", "22/Sep/2019:13:00:00 -0700", "GET", NATIVE_PATH, 200, "91564624"),
            access_line("::1", "22/Sep/2019:13:30:00 -0700", "GET", CMIP6_PATH, 200, "1000000000"),
            "this is not a log line".to_string(),
        ],
    );

    tree.write_log(
        "esgf-data3",
        "access_log-20190923",
        &[
            access_line("9.9.9.9", "23/Sep/2019:01:00:00 +0000", "GET", NATIVE_PATH, 404, "-"),
            access_line("9.9.9.9", "23/Sep/2019:01:05:00 +0000", "HEAD", CMIP6_PATH, 200, "-"),
            access_line("9.9.9.9", "23/Sep/2019:01:06:00 +0000", "GET", "E3SM/too/short.nc", 200, "5"),
            access_line("9.9.9.9", "23/Sep/2019:01:07:00 +0000", "GET", "catalog/index.html", 200, "5"),
            access_line("9.9.9.9", "23/Sep/2019:01:08:00 +0000", "GET", CMIP6_PATH, 200, "12MB"),
        ],
    );

    tree.write_log(
        "esgf-data3",
        "access_log-20200402",
        &[
            access_line("77.7.7.7", "02/Apr/2020:08:00:00 +0000", "GET", VARIABLES_PATH, 206, "2048"),
            access_line("77.7.7.7", "02/Apr/2020:09:00:00 +0000", "GET", CMIP6_PATH, 200, "4096"),
        ],
    );

    tree
}

#[test]
fn batch_over_a_log_tree() {
    // Arrange
    let tree = populated_tree();

    // Act
    let outcome = collect_metrics(&tree.config()).unwrap();

    // Assert
    let report = &outcome.report;
    assert_eq!(report.periods(), vec![q(2019, 3), q(2019, 4), q(2020, 1), q(2020, 2)]);

    let all_q3 = report.row(q(2019, 3), &BucketKey::All).unwrap();
    assert_eq!((all_q3.request_count, all_q3.total_bytes), (2, 1_091_564_624));

    let all_q1 = report.row(q(2020, 1), &BucketKey::All).unwrap();
    assert_eq!((all_q1.request_count, all_q1.total_bytes), (0, 0));
    assert_eq!(all_q1.cumulative_requests, 2);

    let all_q2 = report.row(q(2020, 2), &BucketKey::All).unwrap();
    assert_eq!((all_q2.request_count, all_q2.total_bytes), (2, 6_144));
    assert_eq!(all_q2.cumulative_requests, 4);
    assert_eq!(all_q2.fiscal_period, "FY2020 Q4");

    let monthly = report
        .row(q(2019, 3), &BucketKey::facet("E3SM", "time_frequency", "mon"))
        .unwrap();
    assert_eq!((monthly.request_count, monthly.total_bytes), (1, 91_564_624));

    let variables = report
        .row(
            q(2020, 2),
            &BucketKey::facet("E3SM CMIP6 variables", "collection", "cmip6_variables"),
        )
        .unwrap();
    assert_eq!(variables.request_count, 1);
}

#[test]
fn diagnostics_account_for_every_line() {
    let outcome = collect_metrics(&populated_tree().config()).unwrap();
    let d = &outcome.diagnostics;

    assert_eq!(outcome.stats.sources, 3);
    assert_eq!(outcome.stats.lines_read, 11);
    assert_eq!(outcome.stats.aggregated + d.total(), outcome.stats.lines_read);

    assert_eq!(d.count("esgf-data1", None, FailureKind::Malformed), 1);
    assert_eq!(d.count("esgf-data1", Some(q(2019, 3)), FailureKind::Duplicate), 1);
    assert_eq!(
        d.count("esgf-data3", Some(q(2019, 3)), FailureKind::StatusExcluded(404)),
        1
    );
    assert_eq!(d.count("esgf-data3", Some(q(2019, 3)), FailureKind::MethodExcluded), 1);
    assert_eq!(
        d.count("esgf-data3", Some(q(2019, 3)), FailureKind::SegmentCountMismatch),
        1
    );
    assert_eq!(d.count("esgf-data3", Some(q(2019, 3)), FailureKind::UnrecognizedPath), 1);
    assert_eq!(d.count("esgf-data3", Some(q(2019, 3)), FailureKind::InvalidByteCount), 1);
}

#[test]
fn top_downloaders_skip_loopback() {
    let outcome = collect_metrics(&populated_tree().config()).unwrap();

    let top: Vec<&str> = outcome
        .report
        .top_clients(10)
        .iter()
        .map(|c| c.client.as_str())
        .collect();

    assert_eq!(top, vec!["123.1.1.1", "77.7.7.7"]);
}

#[test]
fn rerunning_gives_identical_output() {
    let tree = populated_tree();

    let first = collect_metrics(&tree.config()).unwrap();
    let second = collect_metrics(&tree.config()).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn config_file_drives_the_pipeline() {
    // Arrange
    let tree = populated_tree();
    let path = tree.write_config(
        r#"pipeline {
  dedup_window     = "30m"
  reference_offset = "-07:00"
}"#,
    );

    // Act
    let config = load_config(&path).unwrap();
    let outcome = collect_metrics(&config).unwrap();

    // Assert
    let all_q3 = outcome.report.row(q(2019, 3), &BucketKey::All).unwrap();
    assert_eq!(all_q3.request_count, 3);
    assert_eq!(outcome.diagnostics.total_of(FailureKind::Duplicate), 0);
}
