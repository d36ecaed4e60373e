pub mod fixtures;
pub mod tracing;

pub use fixtures::{LogTree, access_line};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
