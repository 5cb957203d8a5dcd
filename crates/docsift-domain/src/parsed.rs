//! Parsed content and the processing result record

use crate::document::DocumentMetadata;
use serde::{Deserialize, Serialize};

/// Normalized output of a document parser
///
/// Serialized with a `type` tag of `TEXT` or `PDF`; each variant carries
/// only its own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedContent {
    /// Plain text document
    #[serde(rename = "TEXT")]
    Text {
        /// Pass-through content
        content: String,
        /// Whitespace-separated token count
        word_count: usize,
        /// Newline-separated segment count
        line_count: usize,
    },

    /// PDF-like document
    #[serde(rename = "PDF")]
    Pdf {
        /// Pass-through content
        content: String,
        /// Estimated page count
        pages: usize,
    },
}

impl ParsedContent {
    /// The `type` tag as it appears on the wire
    pub fn type_tag(&self) -> &'static str {
        match self {
            ParsedContent::Text { .. } => "TEXT",
            ParsedContent::Pdf { .. } => "PDF",
        }
    }

    /// Content carried by the parsed record
    pub fn content(&self) -> &str {
        match self {
            ParsedContent::Text { content, .. } | ParsedContent::Pdf { content, .. } => content,
        }
    }
}

/// Outcome of processing one document
///
/// On the wire this is a flat record `{success, metadata?, parsed_content?, error?}`
/// where either the success pair or `error` is present, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ProcessingRecord", try_from = "ProcessingRecord")]
pub enum ProcessingResult {
    /// Document was read, validated and parsed
    Success {
        /// Metadata of the source document
        metadata: DocumentMetadata,
        /// Parser output
        parsed_content: ParsedContent,
    },

    /// Processing stopped with an error message
    Failure {
        /// Human-readable reason
        error: String,
    },
}

impl ProcessingResult {
    /// Build a failure result from any displayable error
    pub fn failure(error: impl ToString) -> Self {
        ProcessingResult::Failure {
            error: error.to_string(),
        }
    }

    /// Whether processing succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessingResult::Success { .. })
    }

    /// Parsed content on success
    pub fn parsed_content(&self) -> Option<&ParsedContent> {
        match self {
            ProcessingResult::Success { parsed_content, .. } => Some(parsed_content),
            ProcessingResult::Failure { .. } => None,
        }
    }

    /// Document metadata on success
    pub fn metadata(&self) -> Option<&DocumentMetadata> {
        match self {
            ProcessingResult::Success { metadata, .. } => Some(metadata),
            ProcessingResult::Failure { .. } => None,
        }
    }

    /// Error message on failure
    pub fn error(&self) -> Option<&str> {
        match self {
            ProcessingResult::Success { .. } => None,
            ProcessingResult::Failure { error } => Some(error),
        }
    }
}

/// Flat wire form of [`ProcessingResult`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProcessingRecord {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<DocumentMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parsed_content: Option<ParsedContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<ProcessingResult> for ProcessingRecord {
    fn from(result: ProcessingResult) -> Self {
        match result {
            ProcessingResult::Success {
                metadata,
                parsed_content,
            } => Self {
                success: true,
                metadata: Some(metadata),
                parsed_content: Some(parsed_content),
                error: None,
            },
            ProcessingResult::Failure { error } => Self {
                success: false,
                metadata: None,
                parsed_content: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<ProcessingRecord> for ProcessingResult {
    type Error = String;

    fn try_from(record: ProcessingRecord) -> Result<Self, Self::Error> {
        match record {
            ProcessingRecord {
                success: true,
                metadata: Some(metadata),
                parsed_content: Some(parsed_content),
                error: None,
            } => Ok(ProcessingResult::Success {
                metadata,
                parsed_content,
            }),
            ProcessingRecord {
                success: false,
                metadata: None,
                parsed_content: None,
                error: Some(error),
            } => Ok(ProcessingResult::Failure { error }),
            _ => Err("processing record must carry either metadata and parsed_content or an error".to_string()),
        }
    }
}
