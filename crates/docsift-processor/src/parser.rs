//! Document parsers and parser selection

use docsift_domain::ParsedContent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Signature every PDF-like document starts with
pub const PDF_SIGNATURE: &str = "%PDF";

/// The closed set of parser variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    /// Plain text
    Text,
    /// PDF-like binary-header format
    Pdf,
}

impl ParserKind {
    /// Get the parser name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserKind::Text => "text",
            ParserKind::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parser for plain text documents
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

impl TextParser {
    /// Content is valid when it is not blank
    pub fn validate(&self, content: &str) -> bool {
        !content.trim().is_empty()
    }

    /// Count words and lines
    ///
    /// Lines are newline-separated segments, so empty content has one line.
    pub fn parse(&self, content: &str) -> ParsedContent {
        info!("Parsing text document");
        ParsedContent::Text {
            content: content.to_string(),
            word_count: content.split_whitespace().count(),
            line_count: line_count(content),
        }
    }
}

/// Parser for PDF-like documents
///
/// The page count is a crude estimate from the line count, not a real
/// page tree walk.
#[derive(Debug, Clone, Copy)]
pub struct PdfParser {
    lines_per_page: usize,
}

impl PdfParser {
    /// Create a parser estimating `lines_per_page` lines per page
    pub fn new(lines_per_page: usize) -> Self {
        Self {
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Content is valid when it starts with the PDF signature
    pub fn validate(&self, content: &str) -> bool {
        content.starts_with(PDF_SIGNATURE)
    }

    /// Estimate pages as lines / lines-per-page, rounded down
    ///
    /// Short documents report 0 pages.
    pub fn parse(&self, content: &str) -> ParsedContent {
        info!("Parsing PDF document");
        ParsedContent::Pdf {
            content: content.to_string(),
            pages: line_count(content) / self.lines_per_page,
        }
    }
}

impl Default for PdfParser {
    fn default() -> Self {
        Self::new(50)
    }
}

/// A selected parser
#[derive(Debug, Clone, Copy)]
pub enum DocumentParser {
    /// Plain text parser
    Text(TextParser),
    /// PDF parser
    Pdf(PdfParser),
}

impl DocumentParser {
    /// Which variant this is
    pub fn kind(&self) -> ParserKind {
        match self {
            DocumentParser::Text(_) => ParserKind::Text,
            DocumentParser::Pdf(_) => ParserKind::Pdf,
        }
    }

    /// Check the content shape before parsing
    pub fn validate(&self, content: &str) -> bool {
        match self {
            DocumentParser::Text(parser) => parser.validate(content),
            DocumentParser::Pdf(parser) => parser.validate(content),
        }
    }

    /// Parse validated content
    pub fn parse(&self, content: &str) -> ParsedContent {
        match self {
            DocumentParser::Text(parser) => parser.parse(content),
            DocumentParser::Pdf(parser) => parser.parse(content),
        }
    }
}

/// Maps file extensions to parser variants
///
/// Selection is total: an absent or unknown extension yields the text parser.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    extensions: BTreeMap<String, ParserKind>,
    pdf_lines_per_page: usize,
}

impl ParserRegistry {
    /// Registry with the built-in `pdf` and `txt` mappings
    pub fn new(pdf_lines_per_page: usize) -> Self {
        let mut extensions = BTreeMap::new();
        extensions.insert("pdf".to_string(), ParserKind::Pdf);
        extensions.insert("txt".to_string(), ParserKind::Text);

        Self {
            extensions,
            pdf_lines_per_page,
        }
    }

    /// Map an extension (case-insensitive) to a parser variant
    pub fn register(&mut self, extension: &str, kind: ParserKind) {
        self.extensions.insert(extension.to_lowercase(), kind);
    }

    /// Parser variant for an extension, falling back to text
    pub fn kind_for(&self, extension: Option<&str>) -> ParserKind {
        extension
            .and_then(|ext| self.extensions.get(&ext.to_lowercase()))
            .copied()
            .unwrap_or(ParserKind::Text)
    }

    /// Select a parser for an extension
    pub fn select(&self, extension: Option<&str>) -> DocumentParser {
        let kind = self.kind_for(extension);
        debug!("Selected {} parser for extension {:?}", kind, extension);

        match kind {
            ParserKind::Text => DocumentParser::Text(TextParser),
            ParserKind::Pdf => DocumentParser::Pdf(PdfParser::new(self.pdf_lines_per_page)),
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new(50)
    }
}

fn line_count(content: &str) -> usize {
    content.split('\n').count()
}
