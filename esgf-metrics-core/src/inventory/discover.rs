use crate::error::BatchError;
use crate::inventory::error::InventoryError;
use crate::pipeline::LogSource;
use chrono::NaiveDate;
use glob::glob;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_LOG_PATTERN: &str = "*/access_log*";

/// Node label for a log with no usable parent directory.
pub const UNKNOWN_NODE: &str = "unknown";

/// One access-log file found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogFile {
    pub path: PathBuf,
    pub node: String,
    /// Taken from a trailing `-YYYYMMDD` in the file name.
    pub date: Option<NaiveDate>,
}

impl LogFile {
    pub fn from_path(path: PathBuf) -> Self {
        let node = path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNKNOWN_NODE.to_string());

        let date = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(log_date);

        Self { path, node, date }
    }

    pub fn read(&self) -> Result<LogSource, BatchError> {
        LogSource::read(self.node.clone(), &self.path)
    }
}

/// Discovers log files matching `pattern` below `root`, sorted by path.
///
/// Directories matched by the pattern are skipped, as are entries the glob
/// walker cannot read.
pub fn discover_logs(root: &Path, pattern: &str) -> Result<Vec<LogFile>, InventoryError> {
    let full = root.join(pattern).to_string_lossy().into_owned();

    let mut paths: Vec<PathBuf> = glob(&full)
        .map_err(|e| InventoryError::Glob {
            pattern: full.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();

    if paths.is_empty() {
        return Err(InventoryError::NoLogs {
            root: root.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    let logs: Vec<LogFile> = paths.into_iter().map(LogFile::from_path).collect();
    info!(root = %root.display(), pattern, files = logs.len(), "discovered access logs");

    Ok(logs)
}

/// Date suffix of an access-log file name, e.g. `access_log-20190923`.
pub fn log_date(file_name: &str) -> Option<NaiveDate> {
    let (_, suffix) = file_name.rsplit_once('-')?;
    if suffix.len() != 8 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(suffix, "%Y%m%d").ok()
}

/// Reads every file in parallel. Output order follows `files`.
pub fn read_sources(files: &[LogFile]) -> Result<Vec<LogSource>, BatchError> {
    files
        .par_iter()
        .map(|file| {
            debug!(path = %file.path.display(), node = %file.node, "reading access log");
            file.read()
        })
        .collect()
}
