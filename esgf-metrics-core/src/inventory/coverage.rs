use crate::inventory::discover::LogFile;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Nodes rotate logs daily; a month with this many logs or fewer is flagged.
pub const COMPLETE_THRESHOLD: usize = 3;

/// A calendar month, or `Undated` for files whose name carries no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogMonth {
    Month { year: i32, month: u32 },
    Undated,
}

impl fmt::Display for LogMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogMonth::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            LogMonth::Undated => f.write_str("undated"),
        }
    }
}

impl Serialize for LogMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageRow {
    pub month: LogMonth,
    pub node: String,
    pub log_count: usize,
    pub complete: bool,
}

/// Log counts per (month, node), chronological with undated files last.
pub fn coverage(files: &[LogFile]) -> Vec<CoverageRow> {
    let mut counts: BTreeMap<(LogMonth, &str), usize> = BTreeMap::new();

    for file in files {
        let month = file.date.map_or(LogMonth::Undated, |d| LogMonth::Month {
            year: d.year(),
            month: d.month(),
        });
        *counts.entry((month, file.node.as_str())).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((month, node), log_count)| CoverageRow {
            month,
            node: node.to_string(),
            log_count,
            complete: log_count > COMPLETE_THRESHOLD,
        })
        .collect()
}
