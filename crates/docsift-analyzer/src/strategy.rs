//! The closed set of analysis strategies

use crate::config::AnalyzerConfig;
use crate::entities::EntityExtractor;
use crate::keywords::KeywordExtractor;
use crate::sentiment::SentimentAnalyzer;
use docsift_domain::{AnalysisType, Finding};

/// One analysis strategy
///
/// Every variant is a pure function of the input text.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Sentiment polarity
    Sentiment(SentimentAnalyzer),
    /// Entity spotting
    Entities(EntityExtractor),
    /// Keyword ranking
    Keywords(KeywordExtractor),
}

impl Strategy {
    /// The analysis type this strategy reports
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            Strategy::Sentiment(_) => AnalysisType::Sentiment,
            Strategy::Entities(_) => AnalysisType::EntityExtraction,
            Strategy::Keywords(_) => AnalysisType::KeywordExtraction,
        }
    }

    /// Run the strategy
    pub fn analyze(&self, text: &str) -> Finding {
        match self {
            Strategy::Sentiment(s) => Finding::Sentiment(s.analyze(text)),
            Strategy::Entities(s) => Finding::EntityExtraction(s.analyze(text)),
            Strategy::Keywords(s) => Finding::KeywordExtraction(s.analyze(text)),
        }
    }
}

/// All strategies in report order: sentiment, entities, keywords
pub fn default_strategies(config: &AnalyzerConfig) -> Vec<Strategy> {
    vec![
        Strategy::Sentiment(SentimentAnalyzer::new(
            config.positive_words.clone(),
            config.negative_words.clone(),
        )),
        Strategy::Entities(EntityExtractor::new(config.proper_noun_limit)),
        Strategy::Keywords(KeywordExtractor::new(
            config.stop_words.iter().cloned(),
            &config.strip_chars,
            config.max_short_word_len,
            config.top_keywords_limit,
        )),
    ]
}
