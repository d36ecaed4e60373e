mod aggregator;
mod bucket;
mod report;

pub use aggregator::*;
pub use bucket::*;
pub use report::*;
