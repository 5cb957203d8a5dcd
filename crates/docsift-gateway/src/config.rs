//! Configuration file parsing for the Gateway.
//!
//! Loads settings from TOML files including bind address, history capacity,
//! and the nested processor and analyzer tables.

use docsift_analyzer::AnalyzerConfig;
use docsift_processor::ProcessorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Gateway configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A nested component configuration was rejected
    #[error("Invalid {component} configuration: {message}")]
    Invalid {
        /// Which table failed
        component: &'static str,
        /// Validation message
        message: String,
    },
}

/// Gateway configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Entries kept per history log (0 disables history)
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Document processor settings
    #[serde(default)]
    pub processor: ProcessorConfig,

    /// Analyzer settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

fn default_history_capacity() -> usize {
    100
}

impl GatewayConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the nested component tables
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.processor
            .validate()
            .map_err(|e| ConfigError::Invalid {
                component: "processor",
                message: e.to_string(),
            })?;
        self.analyzer
            .validate()
            .map_err(|e| ConfigError::Invalid {
                component: "analyzer",
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Configuration for a local development server
    pub fn default_local_config() -> Self {
        GatewayConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            history_capacity: default_history_capacity(),
            processor: ProcessorConfig::default(),
            analyzer: AnalyzerConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default_local_config();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.history_capacity, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = GatewayConfig::default_local_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            history_capacity = 5

            [processor]
            page_size_lines = 40

            [processor.extensions]
            md = "text"

            [analyzer]
            top_keywords_limit = 3
        "#;

        let config: GatewayConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.processor.page_size_lines, 40);
        assert_eq!(config.processor.max_document_bytes, 10 * 1024 * 1024);
        assert_eq!(config.processor.extensions.len(), 1);
        assert_eq!(config.analyzer.top_keywords_limit, 3);
        assert_eq!(config.analyzer.positive_words.len(), 7);
    }

    #[test]
    fn test_nested_tables_optional() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 8081
        "#;

        let config: GatewayConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.history_capacity, 100);
        assert_eq!(config.processor, ProcessorConfig::default());
    }

    #[test]
    fn test_invalid_nested_config() {
        let mut config = GatewayConfig::default_local_config();
        config.processor.page_size_lines = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("Invalid processor configuration"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(&path, "bind_address = \"127.0.0.1\"\nbind_port = 7000\n").unwrap();

        let config = GatewayConfig::from_file(&path).unwrap();
        assert_eq!(config.bind_port, 7000);
    }

    #[test]
    fn test_missing_file() {
        let result = GatewayConfig::from_file("/nonexistent/gateway.toml");
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }
}
