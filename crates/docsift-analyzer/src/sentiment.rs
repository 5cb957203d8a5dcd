//! Sentiment strategy

use docsift_domain::{Polarity, SentimentFinding};
use tracing::info;

/// Scores polarity by substring containment against two word lists
///
/// Each list entry counts at most once, however often it occurs, and may
/// match inside a larger word ("goodness" contains "good").
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    positive_words: Vec<String>,
    negative_words: Vec<String>,
}

impl SentimentAnalyzer {
    /// Create an analyzer from lower-case word lists
    pub fn new(positive_words: Vec<String>, negative_words: Vec<String>) -> Self {
        Self {
            positive_words,
            negative_words,
        }
    }

    /// Analyze the polarity of `text`
    pub fn analyze(&self, text: &str) -> SentimentFinding {
        info!("Performing sentiment analysis");

        let lowered = text.to_lowercase();
        let positive_indicators = count_present(&self.positive_words, &lowered);
        let negative_indicators = count_present(&self.negative_words, &lowered);

        SentimentFinding {
            sentiment: Polarity::from_counts(positive_indicators, negative_indicators),
            positive_indicators,
            negative_indicators,
        }
    }
}

fn count_present(words: &[String], text: &str) -> usize {
    words.iter().filter(|word| text.contains(word.as_str())).count()
}
