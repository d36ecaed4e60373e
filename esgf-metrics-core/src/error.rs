use crate::template::TemplateError;
use thiserror::Error;

/// Reasons a single access-log line is kept out of the metrics.
///
/// All of these are recovered per line: the line is tallied in the
/// diagnostics and the batch moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("malformed log line: {reason}")]
    Malformed { reason: &'static str },

    #[error("invalid byte count '{value}'")]
    InvalidByteCount { value: String },

    #[error("no project template matches path {path}")]
    UnrecognizedPath { path: String },

    #[error("template '{template}' expects {expected} path segments, found {found}")]
    SegmentCountMismatch {
        template: &'static str,
        expected: usize,
        found: usize,
    },
}

impl LineError {
    pub(crate) fn malformed(reason: &'static str) -> Self {
        Self::Malformed { reason }
    }

    pub(crate) fn unrecognized(path: impl Into<String>) -> Self {
        Self::UnrecognizedPath { path: path.into() }
    }
}

/// Failures that abort a whole batch rather than a single line.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no log sources were supplied")]
    NoSources,

    #[error("all {sources} log sources are empty")]
    EmptyInput { sources: usize },

    #[error("failed to read log file {path}: {source}")]
    ReadSource {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}
