pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod diagnostics;
pub mod download;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod period;
pub mod pipeline;
pub mod record;
pub mod template;
