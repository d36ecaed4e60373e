use crate::diagnostics::FailureKind;
use crate::record::RequestRecord;

pub const COUNTED_METHOD: &str = "GET";
pub const COUNTED_STATUSES: &[u16] = &[200, 206];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Keep,
    Exclude(FailureKind),
}

/// Decides whether a request counts as a download.
///
/// Only successful or partial-content GETs count. A `-` byte field does not
/// exclude a request; it simply adds nothing to the byte total.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter;

impl RecordFilter {
    pub fn check(&self, record: &RequestRecord) -> FilterOutcome {
        if record.method != COUNTED_METHOD {
            return FilterOutcome::Exclude(FailureKind::MethodExcluded);
        }

        if !COUNTED_STATUSES.contains(&record.status_code) {
            return FilterOutcome::Exclude(FailureKind::StatusExcluded(record.status_code));
        }

        FilterOutcome::Keep
    }
}
