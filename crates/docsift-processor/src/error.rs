//! Error types for the Document Processor

use thiserror::Error;

/// Errors that can occur while processing a document
#[derive(Error, Debug)]
pub enum ProcessorError {
    /// Locator does not resolve to readable content
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Selected parser rejected the content
    #[error("Document validation failed")]
    ValidationFailed,

    /// Content is not valid text in the expected encoding
    #[error("Document is not valid {encoding}: {locator}")]
    InvalidEncoding {
        /// Locator of the document
        locator: String,
        /// Expected encoding label
        encoding: String,
    },

    /// Document exceeds the configured size limit
    #[error("Document too large: {0} bytes (max: {1})")]
    TooLarge(u64, u64),

    /// Any other I/O failure while reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ProcessorError {
    fn from(e: toml::de::Error) -> Self {
        ProcessorError::Config(e.to_string())
    }
}
