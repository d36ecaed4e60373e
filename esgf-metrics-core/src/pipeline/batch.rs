use crate::aggregate::{Aggregator, MetricsReport};
use crate::diagnostics::{Diagnostics, FailureKind};
use crate::download::{DEFAULT_DEDUP_WINDOW, DedupOutcome, Deduplicator, FilterOutcome, RecordFilter};
use crate::error::{BatchError, LineError};
use crate::period::{Quarter, normalize_timestamp, period_of};
use crate::pipeline::source::LogSource;
use crate::record::{RequestRecord, parse_line};
use crate::template::{
    DEFAULT_SERVING_ROOT, DatasetFacets, PathClassifier, TemplateError, extract_facets,
    normalize_request_path,
};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub serving_root: String,
    pub dedup_window: Duration,
    /// All timestamps are converted to this offset before bucketing.
    pub reference_offset: FixedOffset,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            serving_root: DEFAULT_SERVING_ROOT.to_string(),
            dedup_window: DEFAULT_DEDUP_WINDOW,
            reference_offset: Utc.fix(),
        }
    }
}

/// A line that passed parsing, classification, extraction and filtering.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub record: RequestRecord,
    pub facets: DatasetFacets,
    pub node: String,
    pub source_label: String,
    pub line: usize,
    pub period: Quarter,
    instant: DateTime<Utc>,
}

impl Candidate {
    fn sort_key(&self) -> (DateTime<Utc>, &str, &str, &str, &str, usize) {
        (
            self.instant,
            self.record.client_address.as_str(),
            self.facets.file_id.as_str(),
            self.node.as_str(),
            self.source_label.as_str(),
            self.line,
        )
    }
}

/// Result of the per-source stage.
#[derive(Debug, Clone, Default)]
pub struct SourceOutcome {
    pub candidates: Vec<Candidate>,
    pub diagnostics: Diagnostics,
    pub lines_read: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub sources: usize,
    pub lines_read: u64,
    pub aggregated: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub report: MetricsReport,
    pub diagnostics: Diagnostics,
    pub stats: BatchStats,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    classifier: PathClassifier,
    filter: RecordFilter,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, TemplateError> {
        Ok(Self {
            classifier: PathClassifier::builtin(&config.serving_root)?,
            filter: RecordFilter,
            config,
        })
    }

    pub fn classifier(&self) -> &PathClassifier {
        &self.classifier
    }

    /// Runs every stage over `sources`. Sources are processed in parallel;
    /// the result does not depend on their order.
    pub fn run(&self, sources: &[LogSource]) -> Result<BatchOutcome, BatchError> {
        if sources.is_empty() {
            return Err(BatchError::NoSources);
        }

        let outcomes: Vec<SourceOutcome> = sources
            .par_iter()
            .map(|source| self.process_source(source))
            .collect();

        if outcomes.iter().all(|o| o.lines_read == 0) {
            warn!(sources = sources.len(), "every log source is empty");
            return Err(BatchError::EmptyInput {
                sources: sources.len(),
            });
        }

        Ok(self.merge(sources.len(), outcomes))
    }

    /// Per-source stage: everything up to and including the filter.
    pub fn process_source(&self, source: &LogSource) -> SourceOutcome {
        let mut outcome = SourceOutcome::default();

        for (line_no, line) in source.record_lines() {
            outcome.lines_read += 1;

            match self.admit(source, line_no, line) {
                Ok(candidate) => outcome.candidates.push(candidate),
                Err((kind, period)) => outcome.diagnostics.record(&source.node, period, kind),
            }
        }

        info!(
            node = %source.node,
            source = %source.label,
            lines = outcome.lines_read,
            candidates = outcome.candidates.len(),
            excluded = outcome.diagnostics.total(),
            "processed log source"
        );

        outcome
    }

    /// Single-threaded stage: deterministic ordering, deduplication and
    /// aggregation of everything the per-source stage admitted.
    pub fn merge(&self, sources: usize, outcomes: Vec<SourceOutcome>) -> BatchOutcome {
        let mut diagnostics = Diagnostics::new();
        let mut candidates = Vec::new();
        let mut lines_read = 0;

        for outcome in outcomes {
            lines_read += outcome.lines_read;
            diagnostics.merge(outcome.diagnostics);
            candidates.extend(outcome.candidates);
        }

        candidates.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let mut dedup = Deduplicator::new(self.config.dedup_window);
        let mut aggregator = Aggregator::new();
        let mut aggregated = 0;

        for c in &candidates {
            match dedup.observe(&c.record.client_address, &c.facets.file_id, c.record.timestamp) {
                DedupOutcome::Counted => {
                    aggregator.record(
                        c.period,
                        &c.facets,
                        &c.record.client_address,
                        c.record.bytes_transferred.as_u64(),
                    );
                    aggregated += 1;
                }
                DedupOutcome::Merged => {
                    diagnostics.record(&c.node, Some(c.period), FailureKind::Duplicate);
                }
            }
        }

        info!(
            sources,
            lines_read,
            aggregated,
            excluded = diagnostics.total(),
            buckets = aggregator.len(),
            "batch complete"
        );

        BatchOutcome {
            report: aggregator.into_report(),
            diagnostics,
            stats: BatchStats {
                sources,
                lines_read,
                aggregated,
            },
        }
    }

    fn admit(
        &self,
        source: &LogSource,
        line_no: usize,
        line: &str,
    ) -> Result<Candidate, (FailureKind, Option<Quarter>)> {
        let reference = self.config.reference_offset;

        let record = parse_line(line).map_err(|rejection| {
            let period = rejection.timestamp.map(|ts| period_of(ts, reference));
            log_rejection(source, line_no, &rejection.error);
            (FailureKind::from(&rejection.error), period)
        })?;

        let period = period_of(record.timestamp, reference);
        let reject = |err: LineError| {
            log_rejection(source, line_no, &err);
            (FailureKind::from(&err), Some(period))
        };

        let path = normalize_request_path(&record.path).map_err(reject)?;
        let classified = self.classifier.classify(&path).map_err(reject)?;
        let facets = extract_facets(&classified).map_err(reject)?;

        if let FilterOutcome::Exclude(kind) = self.filter.check(&record) {
            debug!(
                node = %source.node,
                source = %source.label,
                line = line_no + 1,
                method = %record.method,
                status = record.status_code,
                "request excluded by filter"
            );
            return Err((kind, Some(period)));
        }

        let instant = normalize_timestamp(record.timestamp, reference).with_timezone(&Utc);

        Ok(Candidate {
            record,
            facets,
            node: source.node.clone(),
            source_label: source.label.clone(),
            line: line_no,
            period,
            instant,
        })
    }
}

/// Convenience wrapper: build a pipeline from `config` and run it.
pub fn run_batch(sources: &[LogSource], config: PipelineConfig) -> Result<BatchOutcome, BatchError> {
    Pipeline::new(config)?.run(sources)
}

fn log_rejection(source: &LogSource, line_no: usize, err: &LineError) {
    debug!(
        node = %source.node,
        source = %source.label,
        line = line_no + 1,
        kind = %FailureKind::from(err),
        error = %err,
        "line excluded"
    );
}
