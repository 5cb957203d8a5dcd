//! Configuration for the Document Processor

use crate::error::ProcessorError;
use crate::parser::ParserKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the Document Processor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Encoding label recorded in document metadata
    pub encoding: String,

    /// Lines per page used by the PDF page estimate
    pub page_size_lines: usize,

    /// Maximum size of a file read from disk (bytes)
    pub max_document_bytes: u64,

    /// Extra extension mappings on top of `pdf` and `txt`
    pub extensions: BTreeMap<String, ParserKind>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            encoding: docsift_domain::DEFAULT_ENCODING.to_string(),
            page_size_lines: 50,
            max_document_bytes: 10 * 1024 * 1024,
            extensions: BTreeMap::new(),
        }
    }
}

impl ProcessorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ProcessorError> {
        if self.page_size_lines == 0 {
            return Err(ProcessorError::Config(
                "page_size_lines must be greater than 0".to_string(),
            ));
        }
        if self.max_document_bytes == 0 {
            return Err(ProcessorError::Config(
                "max_document_bytes must be greater than 0".to_string(),
            ));
        }
        if self.encoding.trim().is_empty() {
            return Err(ProcessorError::Config("encoding must not be empty".to_string()));
        }
        if let Some(ext) = self
            .extensions
            .keys()
            .find(|ext| ext.is_empty() || ext.contains('.'))
        {
            return Err(ProcessorError::Config(format!(
                "extension '{}' must be a bare suffix without dots",
                ext
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ProcessorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ProcessorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ProcessorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProcessorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size_lines, 50);
        assert_eq!(config.encoding, "utf-8");
    }

    #[test]
    fn test_invalid_page_size() {
        let config = ProcessorConfig {
            page_size_lines: 0,
            ..ProcessorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let mut config = ProcessorConfig::default();
        config.extensions.insert(".md".to_string(), ParserKind::Text);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ProcessorConfig::from_toml(
            r#"
            page_size_lines = 40

            [extensions]
            md = "text"
            "#,
        )
        .unwrap();

        assert_eq!(config.page_size_lines, 40);
        assert_eq!(config.encoding, "utf-8");
        assert_eq!(config.extensions.get("md"), Some(&ParserKind::Text));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ProcessorConfig::default();
        config.extensions.insert("log".to_string(), ParserKind::Text);

        let toml_str = config.to_toml().unwrap();
        let parsed = ProcessorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
