use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub facts: FactsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where number facts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FactSource {
    /// HTTP request to `base_url`.
    Live,
    /// Placeholder text after a fixed delay.
    #[default]
    Mock,
    /// `"{n} is a good number."`, no delay.
    Static,
}

/// Fact lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactsConfig {
    #[serde(default)]
    pub source: FactSource,
    /// Base URL of a numbersapi-compatible service (used by `live`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (used by `live`).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Simulated latency in milliseconds (used by `mock`).
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Log every intent and state change at debug level.
    #[serde(default)]
    pub print_changes: bool,
}

fn default_base_url() -> String {
    "http://numbersapi.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_mock_latency_ms() -> u64 {
    1000
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            source: FactSource::default(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            mock_latency_ms: default_mock_latency_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            print_changes: false,
        }
    }
}
