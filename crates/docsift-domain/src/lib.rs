//! docsift Domain Layer
//!
//! Value types shared by both pipeline stages. Nothing in this crate reads
//! files, logs or spawns; it defines what the processor produces, what the
//! analyzer consumes and produces, and how results are retained.
//!
//! ## Key Concepts
//!
//! - **Document**: raw content plus metadata derived once at construction
//! - **ParsedContent**: normalized parser output, tagged `TEXT` or `PDF`
//! - **ProcessingResult**: success pair or error, never both
//! - **Finding**: one analysis strategy's output, tagged by `analysis_type`
//! - **AnalysisReport**: timestamped, ordered findings of one analysis run
//! - **HistoryStore**: bounded, caller-supplied log of successful results

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod finding;
pub mod history;
pub mod parsed;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use document::{Document, DocumentMetadata, DEFAULT_ENCODING};
pub use finding::{
    AnalysisType, Entities, EntityFinding, Finding, KeywordCount, KeywordFinding, Polarity,
    SentimentFinding,
};
pub use history::{BoundedHistory, SharedHistory};
pub use parsed::{ParsedContent, ProcessingResult};
pub use report::{AnalysisOutcome, AnalysisReport, DocumentData, ReportId};
pub use traits::HistoryStore;
