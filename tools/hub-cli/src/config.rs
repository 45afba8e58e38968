//! CLI configuration.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use hub_data::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["producthub.toml", ".producthub.toml", "producthub.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HubConfig {
    /// Catalog API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HubConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config content; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the products endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Human => f.write_str("human"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default producthub.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# ProductHub configuration

[api]
base_url = "{url}"
timeout_secs = 10

[logging]
# trace, debug, info, warn or error; RUST_LOG takes precedence
level = "warn"
# human or json
format = "human"
"#,
        url = DEFAULT_API_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HubConfig::default();
        assert_eq!(config.api.base_url, "https://dummyjson.com/products");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = HubConfig::parse("producthub.toml", &generate_default_config()).unwrap();
        assert_eq!(config, HubConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = HubConfig::parse(
            "producthub.toml",
            r#"
[logging]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = HubConfig::parse(
            "producthub.json",
            r#"{"api": {"base_url": "http://localhost:9000/products", "timeout_secs": 2}}"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/products");
        assert_eq!(config.api.timeout_secs, 2);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = HubConfig::parse("producthub.toml", "[logging]\nformat = \"xml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("producthub-test-{}.toml", std::process::id()));
        let path = path.to_str().unwrap();

        let mut config = HubConfig::default();
        config.api.timeout_secs = 3;
        config.save(path).unwrap();

        let loaded = HubConfig::load(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, config);
    }
}
