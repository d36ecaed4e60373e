mod dedup;
mod filter;

pub use dedup::*;
pub use filter::*;
