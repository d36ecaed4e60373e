use crate::error::LineError;
use crate::period::Quarter;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Why a line did not contribute to the metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Malformed,
    InvalidByteCount,
    UnrecognizedPath,
    SegmentCountMismatch,
    MethodExcluded,
    StatusExcluded(u16),
    Duplicate,
}

impl From<&LineError> for FailureKind {
    fn from(err: &LineError) -> Self {
        match err {
            LineError::Malformed { .. } => FailureKind::Malformed,
            LineError::InvalidByteCount { .. } => FailureKind::InvalidByteCount,
            LineError::UnrecognizedPath { .. } => FailureKind::UnrecognizedPath,
            LineError::SegmentCountMismatch { .. } => FailureKind::SegmentCountMismatch,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Malformed => f.write_str("malformed"),
            FailureKind::InvalidByteCount => f.write_str("invalid_byte_count"),
            FailureKind::UnrecognizedPath => f.write_str("unrecognized_path"),
            FailureKind::SegmentCountMismatch => f.write_str("segment_count_mismatch"),
            FailureKind::MethodExcluded => f.write_str("method_excluded"),
            FailureKind::StatusExcluded(code) => write!(f, "{code}"),
            FailureKind::Duplicate => f.write_str("duplicate"),
        }
    }
}

/// Tally key. `period` is absent only when a line failed before a timestamp
/// could be read from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DiagnosticKey {
    pub node: String,
    pub period: Option<Quarter>,
    pub kind: FailureKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticEntry {
    #[serde(flatten)]
    pub key: DiagnosticKey,
    pub count: u64,
}

/// Counts of excluded lines by node, period and reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    counts: BTreeMap<DiagnosticKey, u64>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, node: &str, period: Option<Quarter>, kind: FailureKind) {
        let key = DiagnosticKey {
            node: node.to_string(),
            period,
            kind,
        };
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Adds every count from `other`. Order of merging does not matter.
    pub fn merge(&mut self, other: Diagnostics) {
        for (key, count) in other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
    }

    pub fn count(&self, node: &str, period: Option<Quarter>, kind: FailureKind) -> u64 {
        let key = DiagnosticKey {
            node: node.to_string(),
            period,
            kind,
        };
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Total for `kind` across every node and period.
    pub fn total_of(&self, kind: FailureKind) -> u64 {
        self.counts
            .iter()
            .filter(|(k, _)| k.kind == kind)
            .map(|(_, c)| c)
            .sum()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.counts
            .iter()
            .map(|(key, count)| DiagnosticEntry {
                key: key.clone(),
                count: *count,
            })
            .collect()
    }
}

impl Serialize for Diagnostics {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries().serialize(serializer)
    }
}
