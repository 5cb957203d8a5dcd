//! Keyword extraction strategy

use docsift_domain::{KeywordCount, KeywordFinding};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Ranks lower-cased tokens by frequency
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
    strip_chars: Vec<char>,
    max_short_word_len: usize,
    top_keywords_limit: usize,
}

impl KeywordExtractor {
    /// Create an extractor
    ///
    /// Tokens are trimmed of `strip_chars`, then dropped when empty, a stop
    /// word, or `max_short_word_len` characters or shorter.
    pub fn new(
        stop_words: impl IntoIterator<Item = String>,
        strip_chars: &str,
        max_short_word_len: usize,
        top_keywords_limit: usize,
    ) -> Self {
        Self {
            stop_words: stop_words.into_iter().collect(),
            strip_chars: strip_chars.chars().collect(),
            max_short_word_len,
            top_keywords_limit,
        }
    }

    /// Extract the top keywords of `text`
    pub fn analyze(&self, text: &str) -> KeywordFinding {
        info!("Extracting keywords");

        let lowered = text.to_lowercase();

        // Counts keep first-encounter order so the stable sort below breaks ties by it.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for token in lowered.split_whitespace() {
            let keyword = token.trim_matches(|c| self.strip_chars.contains(&c));
            if !self.is_keyword(keyword) {
                continue;
            }
            match index.get(keyword) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(keyword, counts.len());
                    counts.push((keyword, 1));
                }
            }
        }

        let unique_keywords = counts.len();
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let top_keywords = counts
            .into_iter()
            .take(self.top_keywords_limit)
            .map(|(keyword, frequency)| KeywordCount {
                keyword: keyword.to_string(),
                frequency,
            })
            .collect();

        debug!("Counted {} distinct keywords", unique_keywords);

        KeywordFinding {
            top_keywords,
            unique_keywords,
        }
    }

    fn is_keyword(&self, token: &str) -> bool {
        !token.is_empty()
            && !self.stop_words.contains(token)
            && token.chars().count() > self.max_short_word_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalyzerConfig;

    fn extractor() -> KeywordExtractor {
        let config = AnalyzerConfig::default();
        KeywordExtractor::new(
            config.stop_words,
            &config.strip_chars,
            config.max_short_word_len,
            config.top_keywords_limit,
        )
    }

    fn keywords(finding: &KeywordFinding) -> Vec<&str> {
        finding.top_keywords.iter().map(|k| k.keyword.as_str()).collect()
    }

    #[test]
    fn test_keyword_extraction() {
        let finding = extractor().analyze(
            "Machine learning is important. Deep learning uses neural networks. Machine learning is powerful.",
        );

        assert_eq!(finding.top_keywords[0].keyword, "learning");
        assert_eq!(finding.top_keywords[0].frequency, 3);
        assert_eq!(finding.top_keywords[1].keyword, "machine");
        assert_eq!(finding.top_keywords[1].frequency, 2);
        // machine, learning, important, deep, uses, neural, networks, powerful
        assert_eq!(finding.unique_keywords, 8);
    }

    #[test]
    fn test_stop_words_removal() {
        let finding = extractor().analyze("the quick brown fox jumps over the lazy dog");

        assert!(!keywords(&finding).contains(&"the"));
        assert_eq!(keywords(&finding), vec!["quick", "brown", "jumps", "over", "lazy"]);
    }

    #[test]
    fn test_punctuation_and_case_are_normalized() {
        let finding = extractor().analyze("(Rust) rust! RUST, \"rust\"");

        assert_eq!(finding.unique_keywords, 1);
        assert_eq!(finding.top_keywords[0].keyword, "rust");
        assert_eq!(finding.top_keywords[0].frequency, 4);
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        let finding = extractor().analyze("zeta alpha zeta alpha beta");

        assert_eq!(keywords(&finding), vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_top_keywords_capped() {
        let text = (0..30).map(|i| format!("keyword{}", i)).collect::<Vec<_>>().join(" ");
        let finding = extractor().analyze(&text);

        assert_eq!(finding.top_keywords.len(), 10);
        assert_eq!(finding.unique_keywords, 30);
    }

    #[test]
    fn test_only_short_or_punctuation_tokens() {
        let finding = extractor().analyze("a an the ... !!! is");
        assert!(finding.top_keywords.is_empty());
        assert_eq!(finding.unique_keywords, 0);
    }
}
