//! Analyzer error types

use thiserror::Error;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Input carried no content, or empty content
    #[error("No content provided for analysis")]
    EmptyInput,

    /// Input exceeds the configured maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(e: toml::de::Error) -> Self {
        AnalyzerError::Config(e.to_string())
    }
}
