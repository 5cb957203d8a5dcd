//! Document module - one ingested unit and its derived metadata

use serde::{Deserialize, Serialize};

/// Encoding label recorded for every document read as text
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Metadata derived from a document at construction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Locator the document was read from
    pub path: String,

    /// Length of the content in characters
    pub size: usize,

    /// Encoding label of the content
    pub encoding: String,
}

/// A document read from a content source
///
/// Metadata is computed once in [`Document::new`] and cannot be changed
/// afterwards; all fields are private and exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: String,
    content: String,
    metadata: DocumentMetadata,
}

impl Document {
    /// Create a document with the default encoding label
    ///
    /// # Examples
    ///
    /// ```
    /// use docsift_domain::Document;
    ///
    /// let doc = Document::new("notes/today.txt", "Test content");
    /// assert_eq!(doc.metadata().size, 12);
    /// assert_eq!(doc.metadata().encoding, "utf-8");
    /// ```
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_encoding(path, content, DEFAULT_ENCODING)
    }

    /// Create a document with an explicit encoding label
    pub fn with_encoding(
        path: impl Into<String>,
        content: impl Into<String>,
        encoding: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let content = content.into();
        let metadata = DocumentMetadata {
            path: path.clone(),
            size: content.chars().count(),
            encoding: encoding.into(),
        };

        Self {
            path,
            content,
            metadata,
        }
    }

    /// Locator of the document
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw text content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Metadata derived at construction
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Trailing extension of the locator, lower-cased
    ///
    /// Returns `None` when the locator has no `.` at all.
    pub fn extension(&self) -> Option<String> {
        self.path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("/path/to/doc.txt", "This is a test document.");

        assert_eq!(doc.path(), "/path/to/doc.txt");
        assert_eq!(doc.content(), "This is a test document.");
    }

    #[test]
    fn test_document_metadata() {
        let doc = Document::new("/path/to/doc.txt", "Test content");
        let metadata = doc.metadata();

        assert_eq!(metadata.path, "/path/to/doc.txt");
        assert_eq!(metadata.size, 12);
        assert_eq!(metadata.encoding, DEFAULT_ENCODING);
    }

    #[test]
    fn test_size_counts_characters() {
        let doc = Document::new("café.txt", "café");
        assert_eq!(doc.metadata().size, 4);
    }

    #[test]
    fn test_extension() {
        assert_eq!(Document::new("a/b/report.PDF", "").extension().as_deref(), Some("pdf"));
        assert_eq!(Document::new("archive.tar.gz", "").extension().as_deref(), Some("gz"));
        assert_eq!(Document::new("README", "").extension(), None);
    }
}
