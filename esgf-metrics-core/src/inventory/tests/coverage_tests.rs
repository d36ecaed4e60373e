use crate::inventory::{CoverageRow, LogFile, LogMonth, coverage};
use pretty_assertions::assert_eq;

fn file(node: &str, name: &str) -> LogFile {
    LogFile::from_path(format!("/logs/{node}/{name}").into())
}

#[test]
fn counts_logs_per_month_and_node() {
    // Arrange
    let mut files: Vec<LogFile> = (1..=4)
        .map(|d| file("esgf-data1", &format!("access_log-201909{d:02}")))
        .collect();
    files.push(file("esgf-data3", "access_log-20190915"));
    files.push(file("esgf-data1", "access_log-20191001"));

    // Act
    let rows = coverage(&files);

    // Assert
    assert_eq!(
        rows,
        vec![
            CoverageRow {
                month: LogMonth::Month { year: 2019, month: 9 },
                node: "esgf-data1".to_string(),
                log_count: 4,
                complete: true,
            },
            CoverageRow {
                month: LogMonth::Month { year: 2019, month: 9 },
                node: "esgf-data3".to_string(),
                log_count: 1,
                complete: false,
            },
            CoverageRow {
                month: LogMonth::Month { year: 2019, month: 10 },
                node: "esgf-data1".to_string(),
                log_count: 1,
                complete: false,
            },
        ]
    );
}

#[test]
fn three_logs_is_not_complete() {
    let files: Vec<LogFile> = (1..=3)
        .map(|d| file("esgf-data1", &format!("access_log-201909{d:02}")))
        .collect();

    let rows = coverage(&files);

    assert_eq!(rows.len(), 1);
    assert!(!rows[0].complete);
}

#[test]
fn undated_files_sort_last() {
    let files = vec![file("a", "access_log"), file("a", "access_log-20200101")];

    let rows = coverage(&files);

    assert_eq!(rows[0].month.to_string(), "2020-01");
    assert_eq!(rows[1].month, LogMonth::Undated);
    assert_eq!(rows[1].month.to_string(), "undated");
}

#[test]
fn empty_input_has_no_rows() {
    assert!(coverage(&[]).is_empty());
}
