//! Configuration types for bookview

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// View configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Rows per side; capped at 10 by the view
    #[serde(default = "default_depth")]
    pub depth: usize,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_depth() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
