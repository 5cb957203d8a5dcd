//! Finding module - the structured output of one analysis strategy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of analysis that produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Polarity scoring against fixed word lists
    Sentiment,
    /// Token statistics, numbers and capitalized tokens
    EntityExtraction,
    /// Frequency-ranked keywords
    KeywordExtraction,
}

impl AnalysisType {
    /// Get the analysis type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Sentiment => "sentiment",
            AnalysisType::EntityExtraction => "entity_extraction",
            AnalysisType::KeywordExtraction => "keyword_extraction",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall polarity of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// More positive than negative indicators
    Positive,
    /// More negative than positive indicators
    Negative,
    /// Tie, including no indicators at all
    Neutral,
}

impl Polarity {
    /// Decide polarity from indicator counts
    ///
    /// Ties (including 0-0) are neutral.
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        use std::cmp::Ordering;

        match positive.cmp(&negative) {
            Ordering::Greater => Polarity::Positive,
            Ordering::Less => Polarity::Negative,
            Ordering::Equal => Polarity::Neutral,
        }
    }

    /// Get the polarity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentFinding {
    /// Resulting polarity
    pub sentiment: Polarity,
    /// Number of positive list entries found in the text
    pub positive_indicators: usize,
    /// Number of negative list entries found in the text
    pub negative_indicators: usize,
}

/// Entities spotted in a text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entities {
    /// All-digit tokens in original order
    pub numbers: Vec<String>,
    /// Leading capitalized tokens, capped
    pub proper_nouns: Vec<String>,
}

/// Entity extraction finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFinding {
    /// Distinct tokens (case-sensitive)
    pub unique_words: usize,
    /// All tokens
    pub total_words: usize,
    /// Extracted entities
    pub entities: Entities,
}

/// A keyword and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Normalized keyword
    pub keyword: String,
    /// Occurrence count
    pub frequency: usize,
}

/// Keyword extraction finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFinding {
    /// Highest-frequency keywords, descending
    pub top_keywords: Vec<KeywordCount>,
    /// Number of distinct keywords counted
    pub unique_keywords: usize,
}

/// Output of one strategy for one input
///
/// Serialized flat with an `analysis_type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "analysis_type", rename_all = "snake_case")]
pub enum Finding {
    /// Sentiment polarity
    Sentiment(SentimentFinding),
    /// Entity spotting
    EntityExtraction(EntityFinding),
    /// Keyword ranking
    KeywordExtraction(KeywordFinding),
}

impl Finding {
    /// Which analysis produced this finding
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            Finding::Sentiment(_) => AnalysisType::Sentiment,
            Finding::EntityExtraction(_) => AnalysisType::EntityExtraction,
            Finding::KeywordExtraction(_) => AnalysisType::KeywordExtraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_polarity_ties_are_neutral() {
        assert_eq!(Polarity::from_counts(0, 0), Polarity::Neutral);
        assert_eq!(Polarity::from_counts(2, 2), Polarity::Neutral);
        assert_eq!(Polarity::from_counts(3, 1), Polarity::Positive);
        assert_eq!(Polarity::from_counts(0, 1), Polarity::Negative);
    }

    #[test]
    fn test_sentiment_wire_shape() {
        let finding = Finding::Sentiment(SentimentFinding {
            sentiment: Polarity::Positive,
            positive_indicators: 2,
            negative_indicators: 0,
        });

        assert_eq!(
            serde_json::to_value(&finding).unwrap(),
            json!({
                "analysis_type": "sentiment",
                "sentiment": "positive",
                "positive_indicators": 2,
                "negative_indicators": 0
            })
        );
    }

    #[test]
    fn test_entity_wire_shape() {
        let finding = Finding::EntityExtraction(EntityFinding {
            unique_words: 3,
            total_words: 4,
            entities: Entities {
                numbers: vec!["42".to_string()],
                proper_nouns: vec!["Alice".to_string()],
            },
        });

        let value = serde_json::to_value(&finding).unwrap();
        assert_eq!(value["analysis_type"], "entity_extraction");
        assert_eq!(value["entities"]["numbers"], json!(["42"]));
        assert_eq!(value["entities"]["proper_nouns"], json!(["Alice"]));
    }

    #[test]
    fn test_keyword_wire_shape() {
        let finding = Finding::KeywordExtraction(KeywordFinding {
            top_keywords: vec![KeywordCount {
                keyword: "learning".to_string(),
                frequency: 2,
            }],
            unique_keywords: 1,
        });

        let value = serde_json::to_value(&finding).unwrap();
        assert_eq!(value["analysis_type"], "keyword_extraction");
        assert_eq!(value["top_keywords"][0], json!({"keyword": "learning", "frequency": 2}));
        assert_eq!(finding.analysis_type(), AnalysisType::KeywordExtraction);
    }
}
