//! Batch pipeline
//!
//! The overall data processing architecture is:
//!
//! LogSource (one file, one node)
//! parse_line
//! normalize_request_path
//! PathClassifier
//! extract_facets
//! RecordFilter
//! ---- per source, in parallel ----
//! sort candidates by (instant, client, file, node, source, line)
//! Deduplicator
//! Aggregator
//! MetricsReport + Diagnostics
//!

mod batch;
mod source;

pub use batch::*;
pub use source::*;
