//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use docsift_domain::ProcessingResult;
use docsift_processor::DocumentProcessor;

/// Execute the process command.
///
/// Returns whether the document was processed successfully.
pub fn execute_process(args: ProcessArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let result = process_document(&args.path, config)?;
    println!("{}", formatter.format_processing(&result)?);
    Ok(result.is_success())
}

/// Process one document with the configured processor.
pub fn process_document(path: &str, config: &Config) -> Result<ProcessingResult> {
    let mut processor = DocumentProcessor::new(config.processor.clone())?;
    Ok(processor.process(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsift_domain::ParsedContent;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_process_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello world").unwrap();

        let result = process_document(path.to_str().unwrap(), &Config::default()).unwrap();
        match result.parsed_content() {
            Some(ParsedContent::Text { word_count, .. }) => assert_eq!(*word_count, 2),
            other => panic!("Expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_extension_mapping() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.pdfx");
        fs::write(&path, "%PDF-1.4\nbody").unwrap();

        let mut config = Config::default();
        config
            .processor
            .extensions
            .insert("pdfx".to_string(), docsift_processor::ParserKind::Pdf);

        let result = process_document(path.to_str().unwrap(), &config).unwrap();
        assert_eq!(result.parsed_content().map(|c| c.type_tag()), Some("PDF"));
    }

    #[test]
    fn test_missing_file_is_a_failure_record() {
        let result = process_document("/nonexistent/file.txt", &Config::default()).unwrap();
        assert!(!result.is_success());
    }
}
