use crate::aggregate::bucket::{BucketKey, MetricsBucket};
use crate::aggregate::report::MetricsReport;
use crate::period::Quarter;
use crate::template::DatasetFacets;
use ahash::RandomState;
use std::collections::{BTreeMap, HashMap};

/// Per-period request and byte totals, overall, per project template and
/// per facet value within a template.
///
/// Buckets are created on first use and never removed. Combining two
/// aggregators with `merge` is plain addition, so partial aggregators can
/// be merged in any order.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    buckets: BTreeMap<(Quarter, BucketKey), MetricsBucket>,
    clients: HashMap<String, MetricsBucket, RandomState>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one counted download to the `ALL` bucket, to the bucket of the
    /// template that matched, and to one bucket per facet of `facets`.
    pub fn record(&mut self, period: Quarter, facets: &DatasetFacets, client: &str, bytes: u64) {
        let one = MetricsBucket::new(1, bytes);

        self.add(period, BucketKey::All, one);
        self.add(period, BucketKey::project(facets.template), one);
        for facet in &facets.facets {
            self.add(
                period,
                BucketKey::facet(facets.template, facet.name, facet.value.as_str()),
                one,
            );
        }

        *self.clients.entry(client.to_string()).or_default() += one;
    }

    pub fn merge(&mut self, other: Aggregator) {
        for ((period, key), bucket) in other.buckets {
            self.add(period, key, bucket);
        }
        for (client, bucket) in other.clients {
            *self.clients.entry(client).or_default() += bucket;
        }
    }

    pub fn bucket(&self, period: Quarter, key: &BucketKey) -> Option<&MetricsBucket> {
        self.buckets.get(&(period, key.clone()))
    }

    pub fn buckets(&self) -> impl Iterator<Item = (&Quarter, &BucketKey, &MetricsBucket)> {
        self.buckets.iter().map(|((q, k), b)| (q, k, b))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn into_report(self) -> MetricsReport {
        MetricsReport::from_parts(self.buckets, self.clients)
    }

    fn add(&mut self, period: Quarter, key: BucketKey, bucket: MetricsBucket) {
        *self.buckets.entry((period, key)).or_default() += bucket;
    }
}
