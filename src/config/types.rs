use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Simulated backend behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Delay before the normal fetch settles, in milliseconds.
    pub delay_ms: u64,
    /// Delay before the error-simulation fetch settles, in milliseconds.
    pub failing_delay_ms: u64,
    /// Chance that a normal fetch fails (0.0..=1.0).
    pub failure_probability: f64,
    /// Fixed RNG seed. When absent the generator is seeded from the thread RNG.
    pub seed: Option<u64>,
}

/// Screen refresh and transient message timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick interval in milliseconds (spinner and toast expiry).
    pub tick_ms: u64,
    /// Number of ticks an acknowledgement stays on screen.
    pub toast_ticks: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Log destination. Logging is disabled when unset since the TUI owns stdout.
    pub file: Option<PathBuf>,
}

impl FetchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn failing_delay(&self) -> Duration {
        Duration::from_millis(self.failing_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            failing_delay_ms: 2000,
            failure_probability: 0.2,
            seed: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            toast_ticks: 8,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Values supplied on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub failure_probability: Option<f64>,
    pub delay_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(seed) = overrides.seed {
            self.fetch.seed = Some(seed);
        }
        if let Some(probability) = overrides.failure_probability {
            self.fetch.failure_probability = probability;
        }
        if let Some(delay_ms) = overrides.delay_ms {
            self.fetch.delay_ms = delay_ms;
        }
        if let Some(path) = overrides.log_file {
            self.logging.file = Some(path);
        }
    }
}
