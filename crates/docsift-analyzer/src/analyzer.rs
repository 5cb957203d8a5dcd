//! AI Analyzer - runs every strategy and aggregates the findings

use crate::aggregator::ReportAggregator;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::strategy::{default_strategies, Strategy};
use docsift_domain::{AnalysisOutcome, AnalysisReport, DocumentData, HistoryStore};
use tracing::{debug, error, info, warn};

type ReportHistory = Box<dyn HistoryStore<AnalysisReport> + Send>;

/// Runs the fixed strategy pipeline over document content
pub struct AiAnalyzer {
    strategies: Vec<Strategy>,
    config: AnalyzerConfig,
    history: Option<ReportHistory>,
}

impl AiAnalyzer {
    /// Create an analyzer with the given configuration
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: AnalyzerConfig) -> Self {
        Self {
            strategies: default_strategies(&config),
            config,
            history: None,
        }
    }

    /// Record completed reports into `history`
    pub fn with_history<H>(mut self, history: H) -> Self
    where
        H: HistoryStore<AnalysisReport> + Send + 'static,
    {
        self.history = Some(Box::new(history));
        self
    }

    /// The attached history store, if any
    pub fn history(&self) -> Option<&(dyn HistoryStore<AnalysisReport> + Send)> {
        self.history.as_deref()
    }

    /// Strategies in run order
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Analyze document data, folding every error into a failed outcome
    ///
    /// Completed reports are recorded in the attached history store.
    pub fn analyze(&mut self, document_data: &DocumentData) -> AnalysisOutcome {
        let content = document_data.content.as_deref().unwrap_or_default();
        self.analyze_text(content)
    }

    /// Analyze a content string
    pub fn analyze_text(&mut self, content: &str) -> AnalysisOutcome {
        match self.try_analyze(content) {
            Ok(report) => {
                if let Some(history) = self.history.as_mut() {
                    history.record(report.clone());
                }
                info!("Analysis completed successfully");
                AnalysisOutcome::Completed(report)
            }
            Err(AnalyzerError::EmptyInput) => {
                warn!("No content provided for analysis");
                AnalysisOutcome::failure(AnalyzerError::EmptyInput)
            }
            Err(e) => {
                error!("Error during analysis: {}", e);
                AnalysisOutcome::failure(e)
            }
        }
    }

    /// Analyze a content string, returning the error kind on failure
    ///
    /// Does not touch the history store.
    pub fn try_analyze(&self, content: &str) -> Result<AnalysisReport, AnalyzerError> {
        if content.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        if let Some(max) = self.config.max_text_length {
            let length = content.chars().count();
            if length > max {
                return Err(AnalyzerError::TextTooLong(length, max));
            }
        }

        let mut aggregator = ReportAggregator::new();
        for strategy in &self.strategies {
            debug!("Running {} strategy", strategy.analysis_type());
            aggregator.add(strategy.analyze(content));
        }

        Ok(aggregator.finish())
    }
}

impl Default for AiAnalyzer {
    fn default() -> Self {
        Self::from_config(AnalyzerConfig::default())
    }
}
