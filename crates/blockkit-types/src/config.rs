//! Configuration types for Block Kit tooling.
//!
//! `BlockKitConfig` represents a `blockkit.toml` controlling logging and how
//! built layouts are rendered to JSON. Structural limits are fixed by Slack
//! and deliberately not part of the configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration. All fields have sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockKitConfig {
    #[serde(default)]
    pub observe: ObserveConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Logging and tracing settings consumed by `blockkit-observe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserveConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON log lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Bridge tracing spans to OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub enable_otel: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ObserveConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            enable_otel: false,
        }
    }
}

/// How built layouts are rendered for the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Pretty-print rendered JSON.
    #[serde(default)]
    pub pretty: bool,
}

impl BlockKitConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
