use ahash::RandomState;
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_DEDUP_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupOutcome {
    /// First download of the file by this client in the current window.
    Counted,
    /// Re-request inside the window; folded into the counted one.
    Merged,
}

/// Collapses repeated downloads of one file by one client.
///
/// A counted download opens a window of `window` length; further requests
/// for the same `(client, file)` strictly inside it are merged. The first
/// request after the window closes is counted and opens a new one. State
/// lives only as long as the value.
///
/// Records must be observed in chronological order for "first one wins" to
/// hold; the batch merge sorts before deduplicating.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    window: chrono::Duration,
    /// Instant of the last *counted* request per key. Merged requests do not
    /// move it, so a client retrying more often than `window` is still
    /// counted once per window rather than once in total.
    opened_at: HashMap<(String, String), DateTime<Utc>, RandomState>,
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new(DEFAULT_DEDUP_WINDOW)
    }
}

impl Deduplicator {
    pub fn new(window: Duration) -> Self {
        Self {
            window: chrono::Duration::from_std(window).unwrap_or(chrono::Duration::MAX),
            opened_at: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn observe(
        &mut self,
        client: &str,
        file_id: &str,
        at: DateTime<FixedOffset>,
    ) -> DedupOutcome {
        let at = at.with_timezone(&Utc);
        let key = (client.to_string(), file_id.to_string());

        match self.opened_at.get(&key) {
            Some(opened) if (at - *opened).abs() < self.window => DedupOutcome::Merged,
            _ => {
                self.opened_at.insert(key, at);
                DedupOutcome::Counted
            }
        }
    }

    pub fn tracked_keys(&self) -> usize {
        self.opened_at.len()
    }
}
