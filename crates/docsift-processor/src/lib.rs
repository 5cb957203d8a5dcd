//! docsift Processor
//!
//! First pipeline stage: turns a locator into a normalized parsed-content
//! record.
//!
//! # Architecture
//!
//! ```text
//! locator → ContentSource → Document → ParserRegistry → validate → parse → ProcessingResult
//! ```
//!
//! # Key Features
//!
//! - **Total parser selection**: extension `pdf` picks the PDF parser, anything
//!   else (including no extension) picks the text parser
//! - **Explicit error kinds**: `try_process` returns a [`ProcessorError`];
//!   `process` folds it into a `{success: false, error}` record
//! - **Optional history**: attach any bounded [`docsift_domain::HistoryStore`]
//!
//! # Example Usage
//!
//! ```no_run
//! use docsift_processor::{DocumentProcessor, ProcessorConfig};
//! use docsift_domain::BoundedHistory;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut processor = DocumentProcessor::new(ProcessorConfig::default())?
//!     .with_history(BoundedHistory::new(100));
//!
//! let result = processor.process("reports/q3.txt");
//! if let Some(parsed) = result.parsed_content() {
//!     println!("Parsed a {} document", parsed.type_tag());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod processor;
mod source;


pub use config::ProcessorConfig;
pub use error::ProcessorError;
pub use parser::{DocumentParser, ParserKind, ParserRegistry, PdfParser, TextParser, PDF_SIGNATURE};
pub use processor::{DocumentProcessor, ParsedDocument};
pub use source::{ContentSource, FileSource, MemorySource};
