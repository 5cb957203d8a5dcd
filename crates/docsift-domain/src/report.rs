//! Report module - aggregated analysis output

use crate::finding::Finding;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an analysis report based on UUIDv7
///
/// UUIDv7 keeps reports chronologically sortable without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ReportId(u128);

impl ReportId {
    /// Generate a new UUIDv7-based ReportId
    ///
    /// # Examples
    ///
    /// ```
    /// use docsift_domain::ReportId;
    ///
    /// let id = ReportId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ReportId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ReportId from a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use docsift_domain::ReportId;
    ///
    /// let id = ReportId::new();
    /// let parsed = ReportId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid report id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp_millis(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl From<ReportId> for String {
    fn from(id: ReportId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ReportId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ReportId::from_string(&value)
    }
}

/// Aggregated findings of one successful analysis run
///
/// `analysis_count` is derived from `analyses` and only exists on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ReportRecord", try_from = "ReportRecord")]
pub struct AnalysisReport {
    /// Report identifier
    pub id: ReportId,
    /// When the report was created
    pub timestamp: DateTime<Utc>,
    /// Findings in strategy order
    pub analyses: Vec<Finding>,
}

impl AnalysisReport {
    /// Number of findings in the report
    pub fn analysis_count(&self) -> usize {
        self.analyses.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReportRecord {
    id: ReportId,
    timestamp: DateTime<Utc>,
    analyses: Vec<Finding>,
    analysis_count: usize,
}

impl From<AnalysisReport> for ReportRecord {
    fn from(report: AnalysisReport) -> Self {
        Self {
            analysis_count: report.analyses.len(),
            id: report.id,
            timestamp: report.timestamp,
            analyses: report.analyses,
        }
    }
}

impl TryFrom<ReportRecord> for AnalysisReport {
    type Error = String;

    fn try_from(record: ReportRecord) -> Result<Self, Self::Error> {
        if record.analysis_count != record.analyses.len() {
            return Err(format!(
                "analysis_count {} does not match {} analyses",
                record.analysis_count,
                record.analyses.len()
            ));
        }
        Ok(Self {
            id: record.id,
            timestamp: record.timestamp,
            analyses: record.analyses,
        })
    }
}

/// Input handed to the analyzer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentData {
    /// Text to analyze
    #[serde(default)]
    pub content: Option<String>,
}

impl DocumentData {
    /// Wrap a content string
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }
}

/// Result of one `analyze` call
///
/// Serialized flat: the report fields plus `success: true`, or
/// `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "OutcomeRecord", try_from = "OutcomeRecord")]
pub enum AnalysisOutcome {
    /// All strategies ran
    Completed(AnalysisReport),
    /// Analysis did not run or was aborted
    Failed {
        /// Human-readable reason
        error: String,
    },
}

impl AnalysisOutcome {
    /// Build a failed outcome from any displayable error
    pub fn failure(error: impl ToString) -> Self {
        AnalysisOutcome::Failed {
            error: error.to_string(),
        }
    }

    /// Whether the analysis completed
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Completed(_))
    }

    /// Report on success
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Completed(report) => Some(report),
            AnalysisOutcome::Failed { .. } => None,
        }
    }

    /// Error message on failure
    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Completed(_) => None,
            AnalysisOutcome::Failed { error } => Some(error),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OutcomeRecord {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ReportId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    analyses: Option<Vec<Finding>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    analysis_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<AnalysisOutcome> for OutcomeRecord {
    fn from(outcome: AnalysisOutcome) -> Self {
        match outcome {
            AnalysisOutcome::Completed(report) => Self {
                success: true,
                id: Some(report.id),
                timestamp: Some(report.timestamp),
                analysis_count: Some(report.analyses.len()),
                analyses: Some(report.analyses),
                error: None,
            },
            AnalysisOutcome::Failed { error } => Self {
                success: false,
                id: None,
                timestamp: None,
                analyses: None,
                analysis_count: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<OutcomeRecord> for AnalysisOutcome {
    type Error = String;

    fn try_from(record: OutcomeRecord) -> Result<Self, Self::Error> {
        match record {
            OutcomeRecord {
                success: true,
                id: Some(id),
                timestamp: Some(timestamp),
                analyses: Some(analyses),
                analysis_count: Some(analysis_count),
                error: None,
            } => AnalysisReport::try_from(ReportRecord {
                id,
                timestamp,
                analyses,
                analysis_count,
            })
            .map(AnalysisOutcome::Completed),
            OutcomeRecord {
                success: false,
                error: Some(error),
                ..
            } => Ok(AnalysisOutcome::Failed { error }),
            _ => Err("analysis record must carry either a complete report or an error".to_string()),
        }
    }
}
