use crate::error::BatchError;
use std::fs;
use std::path::Path;

/// The lines of one access-log file, labelled with the node that served them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSource {
    pub node: String,
    /// Identifies the file within its node, usually the file name.
    pub label: String,
    pub lines: Vec<String>,
}

impl LogSource {
    pub fn new(node: impl Into<String>, label: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            node: node.into(),
            label: label.into(),
            lines,
        }
    }

    pub fn from_text(node: impl Into<String>, label: impl Into<String>, text: &str) -> Self {
        Self::new(node, label, text.lines().map(str::to_string).collect())
    }

    /// Reads a log file. Invalid UTF-8 is replaced rather than rejected so
    /// that one bad byte only spoils its own line.
    pub fn read(node: impl Into<String>, path: &Path) -> Result<Self, BatchError> {
        let bytes = fs::read(path).map_err(|e| BatchError::ReadSource {
            path: path.to_path_buf(),
            source: e,
        })?;

        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::from_text(node, label, &String::from_utf8_lossy(&bytes)))
    }

    /// Lines that carry content; blank lines are not log records.
    pub fn record_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| (i, l.as_str()))
    }
}
