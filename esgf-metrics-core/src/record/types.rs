use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Byte field of an access-log line. Apache writes `-` when nothing was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteCount {
    Known(u64),
    Unknown,
}

impl ByteCount {
    /// Bytes counted toward totals. An unknown count contributes nothing.
    pub fn as_u64(&self) -> u64 {
        match self {
            ByteCount::Known(n) => *n,
            ByteCount::Unknown => 0,
        }
    }
}

/// One parsed line of an Apache combined-format access log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    pub client_address: String,
    /// Timestamp with the offset exactly as written in the log.
    pub timestamp: DateTime<FixedOffset>,
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status_code: u16,
    pub bytes_transferred: ByteCount,
    pub referrer: String,
    pub user_agent: String,
}
