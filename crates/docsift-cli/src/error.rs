//! Error types for the CLI application.

use docsift_analyzer::AnalyzerError;
use docsift_processor::ProcessorError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Processor setup error
    #[error("Processor error: {0}")]
    Processor(#[from] ProcessorError),

    /// Analyzer setup error
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
