//! Project templates: the directory grammars data nodes publish under, and
//! the classifier/extractor pair that turns a request path into a dataset
//! identity plus facets.
//!
//! request path
//! normalize_request_path
//! PathClassifier::classify   (longest template prefix wins)
//! extract_facets             (positional segment -> facet name)
//! DatasetFacets

mod builtin;
mod classifier;
mod error;
mod extract;
mod path;
mod types;

pub use builtin::*;
pub use classifier::*;
pub use error::*;
pub use extract::*;
pub use path::*;
pub use types::*;
