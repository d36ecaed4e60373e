mod duration;
mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use duration::parse_duration;
pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config, parse_config};
pub use types::{LogsConfig, MetricsConfig};
