use crate::aggregate::bucket::{BucketKey, MetricsBucket};
use crate::period::Quarter;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::net::IpAddr;

/// One key's metrics for one period, with running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub period: Quarter,
    pub fiscal_period: String,
    pub key: BucketKey,
    pub request_count: u64,
    pub total_bytes: u64,
    pub cumulative_requests: u64,
    pub cumulative_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientTotal {
    pub client: String,
    pub request_count: u64,
    pub total_bytes: u64,
}

/// Final output of a run, handed to persistence and rendering.
///
/// Each key has one row per quarter from the first quarter it appears in
/// through the last quarter of the run; quarters without activity have zero
/// period values and carry the cumulative totals forward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsReport {
    rows: Vec<ReportRow>,
    clients: Vec<ClientTotal>,
}

impl MetricsReport {
    pub(crate) fn from_parts<S: BuildHasher>(
        buckets: BTreeMap<(Quarter, BucketKey), MetricsBucket>,
        clients: HashMap<String, MetricsBucket, S>,
    ) -> Self {
        Self {
            rows: cumulative_rows(buckets),
            clients: ranked_clients(clients),
        }
    }

    /// Rows ordered by key, then chronologically.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn row(&self, period: Quarter, key: &BucketKey) -> Option<&ReportRow> {
        self.rows
            .iter()
            .find(|r| r.period == period && &r.key == key)
    }

    pub fn series<'a>(&'a self, key: &'a BucketKey) -> impl Iterator<Item = &'a ReportRow> + 'a {
        self.rows.iter().filter(move |r| &r.key == key)
    }

    pub fn keys(&self) -> Vec<&BucketKey> {
        let mut keys: Vec<&BucketKey> = self.rows.iter().map(|r| &r.key).collect();
        keys.dedup();
        keys
    }

    pub fn periods(&self) -> Vec<Quarter> {
        let mut periods: Vec<Quarter> = self.rows.iter().map(|r| r.period).collect();
        periods.sort();
        periods.dedup();
        periods
    }

    /// Largest downloaders by bytes, loopback clients excluded.
    pub fn top_clients(&self, n: usize) -> Vec<&ClientTotal> {
        self.clients
            .iter()
            .filter(|c| !is_loopback(&c.client))
            .take(n)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cumulative_rows(buckets: BTreeMap<(Quarter, BucketKey), MetricsBucket>) -> Vec<ReportRow> {
    let Some(last) = buckets.keys().map(|(q, _)| *q).max() else {
        return Vec::new();
    };

    let mut by_key: BTreeMap<BucketKey, BTreeMap<Quarter, MetricsBucket>> = BTreeMap::new();
    for ((period, key), bucket) in buckets {
        by_key.entry(key).or_default().insert(period, bucket);
    }

    let mut rows = Vec::new();
    for (key, series) in by_key {
        let Some(mut period) = series.keys().next().copied() else {
            continue;
        };

        let mut running = MetricsBucket::default();
        while period <= last {
            let bucket = series.get(&period).copied().unwrap_or_default();
            running += bucket;

            rows.push(ReportRow {
                period,
                fiscal_period: period.fiscal().to_string(),
                key: key.clone(),
                request_count: bucket.request_count,
                total_bytes: bucket.total_bytes,
                cumulative_requests: running.request_count,
                cumulative_bytes: running.total_bytes,
            });

            period = period.next();
        }
    }

    rows
}

fn ranked_clients<S: BuildHasher>(clients: HashMap<String, MetricsBucket, S>) -> Vec<ClientTotal> {
    let mut ranked: Vec<ClientTotal> = clients
        .into_iter()
        .map(|(client, bucket)| ClientTotal {
            client,
            request_count: bucket.request_count,
            total_bytes: bucket.total_bytes,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.total_bytes
            .cmp(&a.total_bytes)
            .then_with(|| a.client.cmp(&b.client))
    });
    ranked
}

fn is_loopback(client: &str) -> bool {
    client
        .parse::<IpAddr>()
        .map(|ip| ip.is_loopback())
        .unwrap_or(client == "localhost")
}
