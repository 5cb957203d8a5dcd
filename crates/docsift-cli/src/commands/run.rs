//! Run command implementation.
//!
//! Processes each document, then analyzes the parsed content of the ones
//! that succeeded.

use crate::cli::RunArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use docsift_analyzer::AiAnalyzer;
use docsift_domain::{AnalysisOutcome, BoundedHistory, ProcessingResult};
use docsift_processor::DocumentProcessor;
use serde::Serialize;
use tracing::debug;

/// Result of running one document through both stages
#[derive(Debug, Serialize)]
pub struct RunRecord {
    /// Path as given
    pub path: String,
    /// Processing stage
    pub document: ProcessingResult,
    /// Analysis stage, absent when processing failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisOutcome>,
}

impl RunSummary {
    /// One-line tally of the run
    pub fn message(&self) -> String {
        let succeeded = self.records.iter().filter(|r| r.is_success()).count();
        format!(
            "Processed {} document(s), {} succeeded; history retains {} document(s) and {} report(s)",
            self.records.len(),
            succeeded,
            self.documents_recorded,
            self.analyses_recorded
        )
    }
}

impl RunRecord {
    /// Both stages succeeded
    pub fn is_success(&self) -> bool {
        self.document.is_success() && self.analysis.as_ref().is_some_and(AnalysisOutcome::is_success)
    }
}

/// Summary of a run
#[derive(Debug)]
pub struct RunSummary {
    /// Per-document records in input order
    pub records: Vec<RunRecord>,
    /// Entries in the processing history at the end of the run
    pub documents_recorded: usize,
    /// Entries in the analysis history at the end of the run
    pub analyses_recorded: usize,
}

/// Execute the run command.
///
/// Returns whether every document made it through both stages.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let summary = run_documents(&args.paths, config)?;
    let all_succeeded = summary.records.iter().all(RunRecord::is_success);

    if formatter.format() == OutputFormat::Json {
        println!("{}", formatter.json(&summary.records)?);
        return Ok(all_succeeded);
    }

    for record in &summary.records {
        println!("{}", formatter.info(&record.path));
        println!("{}", formatter.format_processing(&record.document)?);
        if let Some(analysis) = &record.analysis {
            println!("{}", formatter.format_outcome(analysis)?);
        }
        println!();
    }

    let message = summary.message();
    if all_succeeded {
        println!("{}", formatter.success(&message));
    } else {
        println!("{}", formatter.warning(&message));
    }

    Ok(all_succeeded)
}

/// Process and analyze every path with one processor and one analyzer.
pub fn run_documents(paths: &[String], config: &Config) -> Result<RunSummary> {
    let capacity = config.settings.history_size;
    let mut processor =
        DocumentProcessor::new(config.processor.clone())?.with_history(BoundedHistory::new(capacity));
    let mut analyzer =
        AiAnalyzer::new(config.analyzer.clone())?.with_history(BoundedHistory::new(capacity));

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let document = processor.process(path);
        let analysis = document.parsed_content().map(|parsed| {
            debug!("Analyzing parsed content of {}", path);
            analyzer.analyze_text(parsed.content())
        });

        records.push(RunRecord {
            path: path.clone(),
            document,
            analysis,
        });
    }

    Ok(RunSummary {
        records,
        documents_recorded: processor.history().map_or(0, |h| h.len()),
        analyses_recorded: analyzer.history().map_or(0, |h| h.len()),
    })
}
