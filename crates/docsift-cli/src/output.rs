//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docsift_domain::{AnalysisOutcome, Finding, ParsedContent, ProcessingResult};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a processing result.
    pub fn format_processing(&self, result: &ProcessingResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.json(result),
            OutputFormat::Table => Ok(self.processing_table(result)),
        }
    }

    /// Format an analysis outcome.
    pub fn format_outcome(&self, outcome: &AnalysisOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.json(outcome),
            OutputFormat::Table => Ok(self.outcome_table(outcome)),
        }
    }

    /// Pretty-printed JSON of any record.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    fn processing_table(&self, result: &ProcessingResult) -> String {
        let (metadata, parsed) = match result {
            ProcessingResult::Success {
                metadata,
                parsed_content,
            } => (metadata, parsed_content),
            ProcessingResult::Failure { error } => return self.error(error),
        };

        let mut rows = vec![
            ("Path", metadata.path.clone()),
            ("Size", format!("{} chars", metadata.size)),
            ("Encoding", metadata.encoding.clone()),
            ("Type", parsed.type_tag().to_string()),
        ];
        match parsed {
            ParsedContent::Text {
                word_count,
                line_count,
                ..
            } => {
                rows.push(("Words", word_count.to_string()));
                rows.push(("Lines", line_count.to_string()));
            }
            ParsedContent::Pdf { pages, .. } => {
                rows.push(("Pages", pages.to_string()));
            }
        }

        self.table(["Field", "Value"], rows)
    }

    fn outcome_table(&self, outcome: &AnalysisOutcome) -> String {
        let report = match outcome {
            AnalysisOutcome::Completed(report) => report,
            AnalysisOutcome::Failed { error } => return self.error(error),
        };

        let rows = report
            .analyses
            .iter()
            .map(|finding| (finding.analysis_type().as_str(), summarize(finding)));

        let heading = self.info(&format!(
            "Report {} ({} analyses, {})",
            report.id,
            report.analysis_count(),
            report.timestamp
        ));
        format!("{}\n{}", heading, self.table(["Analysis", "Result"], rows))
    }

    fn table<'a>(
        &self,
        header: [&str; 2],
        rows: impl IntoIterator<Item = (&'a str, String)>,
    ) -> String {
        let mut builder = Builder::default();
        builder.push_record(header);

        for (label, value) in rows {
            builder.push_record([label.to_string(), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// One-line summary of a finding.
fn summarize(finding: &Finding) -> String {
    match finding {
        Finding::Sentiment(s) => format!(
            "{} (+{} / -{})",
            s.sentiment, s.positive_indicators, s.negative_indicators
        ),
        Finding::EntityExtraction(e) => format!(
            "{} unique of {} words; numbers: {}; proper nouns: {}",
            e.unique_words,
            e.total_words,
            join_or_dash(&e.entities.numbers),
            join_or_dash(&e.entities.proper_nouns)
        ),
        Finding::KeywordExtraction(k) => {
            let keywords: Vec<String> = k
                .top_keywords
                .iter()
                .map(|kw| format!("{} ({})", kw.keyword, kw.frequency))
                .collect();
            format!("{} of {} keywords: {}", keywords.len(), k.unique_keywords, join_or_dash(&keywords))
        }
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
