//! Log inventory
//!
//! Finds the access logs under a logs root and reports how completely each
//! node's logs cover each month. The layout is one directory per node:
//!
//! ```text
//! <root>/esgf-data1/access_log-20190923
//! <root>/esgf-data1/access_log-20190924
//! <root>/esgf-data3/access_log-20190923
//! ```

mod coverage;
mod discover;
mod error;
#[cfg(test)]
mod tests;

pub use coverage::*;
pub use discover::*;
pub use error::InventoryError;
