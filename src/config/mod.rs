//! Configuration loaded from TOML with command-line overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ConfigOverrides, FetchConfig, LoggingConfig, UiConfig};
