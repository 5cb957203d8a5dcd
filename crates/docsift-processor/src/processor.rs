//! Core Document Processor implementation

use crate::config::ProcessorConfig;
use crate::error::ProcessorError;
use crate::parser::ParserRegistry;
use crate::source::{ContentSource, FileSource};
use docsift_domain::{Document, HistoryStore, ParsedContent, ProcessingResult};
use tracing::{error, info, warn};

/// A document that passed validation and was parsed
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The document as read from the source
    pub document: Document,

    /// Parser output
    pub parsed_content: ParsedContent,
}

impl From<ParsedDocument> for ProcessingResult {
    fn from(parsed: ParsedDocument) -> Self {
        ProcessingResult::Success {
            metadata: parsed.document.metadata().clone(),
            parsed_content: parsed.parsed_content,
        }
    }
}

type ResultHistory = Box<dyn HistoryStore<ProcessingResult> + Send>;

/// Reads a document, selects a parser by extension, validates and parses it
pub struct DocumentProcessor<S = FileSource>
where
    S: ContentSource,
{
    source: S,
    registry: ParserRegistry,
    config: ProcessorConfig,
    history: Option<ResultHistory>,
}

impl DocumentProcessor<FileSource> {
    /// Create a processor reading from the filesystem
    pub fn new(config: ProcessorConfig) -> Result<Self, ProcessorError> {
        let source = FileSource::new(config.max_document_bytes).with_encoding(config.encoding.clone());
        Self::with_source(source, config)
    }
}

impl Default for DocumentProcessor<FileSource> {
    fn default() -> Self {
        let config = ProcessorConfig::default();
        let source = FileSource::new(config.max_document_bytes);
        Self::from_parts(source, config)
    }
}

impl<S> DocumentProcessor<S>
where
    S: ContentSource,
{
    /// Create a processor reading from a custom source
    pub fn with_source(source: S, config: ProcessorConfig) -> Result<Self, ProcessorError> {
        config.validate()?;
        Ok(Self::from_parts(source, config))
    }

    fn from_parts(source: S, config: ProcessorConfig) -> Self {
        let mut registry = ParserRegistry::new(config.page_size_lines);
        for (extension, kind) in &config.extensions {
            registry.register(extension, *kind);
        }

        Self {
            source,
            registry,
            config,
            history: None,
        }
    }

    /// Record successful results into `history`
    pub fn with_history<H>(mut self, history: H) -> Self
    where
        H: HistoryStore<ProcessingResult> + Send + 'static,
    {
        self.history = Some(Box::new(history));
        self
    }

    /// The attached history store, if any
    pub fn history(&self) -> Option<&(dyn HistoryStore<ProcessingResult> + Send)> {
        self.history.as_deref()
    }

    /// The parser registry in use
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Process a document, folding every error into a failure result
    ///
    /// Successful results are recorded in the attached history store.
    pub fn process(&mut self, locator: &str) -> ProcessingResult {
        match self.try_process(locator) {
            Ok(parsed) => {
                let result = ProcessingResult::from(parsed);
                if let Some(history) = self.history.as_mut() {
                    history.record(result.clone());
                }
                info!("Successfully processed document: {}", locator);
                result
            }
            Err(ProcessorError::ValidationFailed) => {
                warn!("Document validation failed: {}", locator);
                ProcessingResult::failure(ProcessorError::ValidationFailed)
            }
            Err(e @ ProcessorError::NotFound(_)) => {
                error!("{}", e);
                ProcessingResult::failure(e)
            }
            Err(e) => {
                error!("Error processing document {}: {}", locator, e);
                ProcessingResult::failure(e)
            }
        }
    }

    /// Process a document, returning the error kind on failure
    ///
    /// Does not touch the history store.
    pub fn try_process(&self, locator: &str) -> Result<ParsedDocument, ProcessorError> {
        let content = self.source.read(locator)?;
        let document = Document::with_encoding(locator, content, self.config.encoding.clone());

        let extension = document.extension();
        let parser = self.registry.select(extension.as_deref());

        if !parser.validate(document.content()) {
            return Err(ProcessorError::ValidationFailed);
        }

        let parsed_content = parser.parse(document.content());

        Ok(ParsedDocument {
            document,
            parsed_content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use docsift_domain::BoundedHistory;

    fn create_test_processor(source: MemorySource) -> DocumentProcessor<MemorySource> {
        DocumentProcessor::with_source(source, ProcessorConfig::default()).unwrap()
    }

    #[test]
    fn test_process_text_document() {
        let source = MemorySource::new().with_document("notes.txt", "hello world");
        let mut processor = create_test_processor(source);

        let result = processor.process("notes.txt");
        assert!(result.is_success());
        assert_eq!(result.metadata().unwrap().size, 11);
        assert!(matches!(
            result.parsed_content(),
            Some(ParsedContent::Text { word_count: 2, line_count: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_extension_uses_text_parser() {
        let source = MemorySource::new().with_document("report.docx", "plain words here");
        let mut processor = create_test_processor(source);

        let result = processor.process("report.docx");
        assert_eq!(result.parsed_content().unwrap().type_tag(), "TEXT");
    }

    #[test]
    fn test_pdf_extension_validates_signature() {
        let source = MemorySource::new()
            .with_document("good.pdf", "%PDF-1.4\nbody")
            .with_document("bad.PDF", "not a pdf");
        let mut processor = create_test_processor(source);

        let good = processor.process("good.pdf");
        assert!(matches!(good.parsed_content(), Some(ParsedContent::Pdf { pages: 0, .. })));

        let bad = processor.process("bad.PDF");
        assert_eq!(bad.error(), Some("Document validation failed"));
    }

    #[test]
    fn test_not_found_mentions_locator() {
        let mut processor = create_test_processor(MemorySource::new());

        let result = processor.process("missing.txt");
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("Document not found: missing.txt"));
    }

    #[test]
    fn test_try_process_returns_error_kind() {
        let source = MemorySource::new().with_document("blank.txt", "   ");
        let processor = create_test_processor(source);

        assert!(matches!(
            processor.try_process("blank.txt"),
            Err(ProcessorError::ValidationFailed)
        ));
    }

    #[test]
    fn test_history_records_only_successes() {
        let source = MemorySource::new()
            .with_document("a.txt", "alpha")
            .with_document("b.txt", "");
        let mut processor = create_test_processor(source).with_history(BoundedHistory::new(10));

        processor.process("a.txt");
        processor.process("b.txt");
        processor.process("c.txt");

        let history = processor.history().unwrap();
        assert_eq!(history.len(), 1);
        assert!(history.snapshot()[0].is_success());
    }

    #[test]
    fn test_no_history_by_default() {
        let source = MemorySource::new().with_document("a.txt", "alpha");
        let mut processor = create_test_processor(source);
        processor.process("a.txt");

        assert!(processor.history().is_none());
    }

    #[test]
    fn test_configured_extension() {
        let mut config = ProcessorConfig::default();
        config.extensions.insert("scan".to_string(), crate::parser::ParserKind::Pdf);
        let source = MemorySource::new().with_document("page.scan", "%PDF-1.3");
        let mut processor = DocumentProcessor::with_source(source, config).unwrap();

        let result = processor.process("page.scan");
        assert_eq!(result.parsed_content().unwrap().type_tag(), "PDF");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ProcessorConfig {
            page_size_lines: 0,
            ..ProcessorConfig::default()
        };
        assert!(DocumentProcessor::with_source(MemorySource::new(), config).is_err());
    }
}
