//! Content sources - resolve a locator to text

use crate::error::ProcessorError;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};

/// Resolves a locator to the full text it addresses
pub trait ContentSource {
    /// Read the whole content behind `locator`
    ///
    /// Unresolvable locators must map to [`ProcessorError::NotFound`].
    fn read(&self, locator: &str) -> Result<String, ProcessorError>;
}

/// Reads documents from the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    max_bytes: u64,
    encoding: String,
}

impl FileSource {
    /// Create a source refusing files larger than `max_bytes`
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            encoding: docsift_domain::DEFAULT_ENCODING.to_string(),
        }
    }

    /// Set the encoding label used in error messages
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

impl FileSource {
    fn io_error(&self, locator: &str, e: io::Error) -> ProcessorError {
        match e.kind() {
            ErrorKind::NotFound => ProcessorError::NotFound(locator.to_string()),
            _ => ProcessorError::Io(e),
        }
    }
}

impl ContentSource for FileSource {
    /// Reads at most `max_bytes + 1` bytes, so pipes and devices whose
    /// metadata reports no length are still bounded. Line endings are
    /// normalized to `\n`.
    fn read(&self, locator: &str) -> Result<String, ProcessorError> {
        let metadata = fs::metadata(locator).map_err(|e| self.io_error(locator, e))?;

        if metadata.is_file() && metadata.len() > self.max_bytes {
            return Err(ProcessorError::TooLarge(metadata.len(), self.max_bytes));
        }

        let file = File::open(locator).map_err(|e| self.io_error(locator, e))?;
        let mut bytes = Vec::new();
        file.take(self.max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| self.io_error(locator, e))?;

        let read = bytes.len() as u64;
        if read > self.max_bytes {
            return Err(ProcessorError::TooLarge(read, self.max_bytes));
        }

        let text = String::from_utf8(bytes).map_err(|_| ProcessorError::InvalidEncoding {
            locator: locator.to_string(),
            encoding: self.encoding.clone(),
        })?;

        Ok(normalize_newlines(text))
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// In-memory documents keyed by locator
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document
    pub fn insert(&mut self, locator: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(locator.into(), content.into());
    }

    /// Builder-style [`MemorySource::insert`]
    pub fn with_document(mut self, locator: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(locator, content);
        self
    }
}

impl ContentSource for MemorySource {
    fn read(&self, locator: &str) -> Result<String, ProcessorError> {
        self.documents
            .get(locator)
            .cloned()
            .ok_or_else(|| ProcessorError::NotFound(locator.to_string()))
    }
}
