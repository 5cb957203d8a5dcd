//! Analyzer configuration

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: [&str; 7] = [
    "good",
    "great",
    "excellent",
    "positive",
    "best",
    "wonderful",
    "amazing",
];

const NEGATIVE_WORDS: [&str; 5] = ["bad", "poor", "worst", "negative", "terrible"];

const STOP_WORDS: [&str; 13] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "is", "with",
];

const STRIP_CHARS: &str = ".,!?:;()\"'";

/// Word lists and limits used by the analysis strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Positive sentiment indicators (lower-case, matched as substrings)
    pub positive_words: Vec<String>,

    /// Negative sentiment indicators (lower-case, matched as substrings)
    pub negative_words: Vec<String>,

    /// Tokens never reported as keywords
    pub stop_words: Vec<String>,

    /// Characters trimmed from both ends of keyword tokens
    pub strip_chars: String,

    /// Keyword tokens of this many characters or fewer are discarded
    pub max_short_word_len: usize,

    /// Number of keywords reported
    pub top_keywords_limit: usize,

    /// Number of capitalized tokens reported
    pub proper_noun_limit: usize,

    /// Optional cap on input length (characters); unset means no cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_text_length: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            positive_words: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative_words: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            strip_chars: STRIP_CHARS.to_string(),
            max_short_word_len: 3,
            top_keywords_limit: 10,
            proper_noun_limit: 10,
            max_text_length: None,
        }
    }
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        for (name, list) in [
            ("positive_words", &self.positive_words),
            ("negative_words", &self.negative_words),
            ("stop_words", &self.stop_words),
        ] {
            // Text is lower-cased before matching, so upper-case entries could never match.
            if let Some(word) = list.iter().find(|w| w.is_empty() || **w != w.to_lowercase()) {
                return Err(AnalyzerError::Config(format!(
                    "{} entry '{}' must be non-empty and lower-case",
                    name, word
                )));
            }
        }
        if self.top_keywords_limit == 0 {
            return Err(AnalyzerError::Config(
                "top_keywords_limit must be greater than 0".to_string(),
            ));
        }
        if self.max_text_length == Some(0) {
            return Err(AnalyzerError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, AnalyzerError> {
        toml::to_string_pretty(self)
            .map_err(|e| AnalyzerError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
