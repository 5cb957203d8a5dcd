//! Collects findings into a report

use chrono::{DateTime, Utc};
use docsift_domain::{AnalysisReport, Finding, ReportId};

/// Accumulates findings for one analysis run
///
/// The id and timestamp are fixed when the aggregator is created.
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    id: ReportId,
    timestamp: DateTime<Utc>,
    analyses: Vec<Finding>,
}

impl ReportAggregator {
    /// Start an empty report stamped now
    pub fn new() -> Self {
        Self {
            id: ReportId::new(),
            timestamp: Utc::now(),
            analyses: Vec::new(),
        }
    }

    /// Append a finding
    pub fn add(&mut self, finding: Finding) {
        self.analyses.push(finding);
    }

    /// Findings collected so far
    pub fn analyses(&self) -> &[Finding] {
        &self.analyses
    }

    /// Number of findings collected so far
    pub fn analysis_count(&self) -> usize {
        self.analyses.len()
    }

    /// Finish the report
    pub fn finish(self) -> AnalysisReport {
        AnalysisReport {
            id: self.id,
            timestamp: self.timestamp,
            analyses: self.analyses,
        }
    }
}

impl Default for ReportAggregator {
    fn default() -> Self {
        Self::new()
    }
}
