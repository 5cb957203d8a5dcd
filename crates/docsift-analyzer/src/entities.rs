//! Entity extraction strategy

use docsift_domain::{Entities, EntityFinding};
use std::collections::HashSet;
use tracing::info;

/// Spots numbers and capitalized tokens
///
/// Tokens are separated by Unicode whitespace as `str::split_whitespace`
/// defines it, so the information separators `\x1c`..`\x1f` stay inside a
/// token. They are compared case-sensitively. A number is a token made only
/// of ASCII digits; other scripts' decimal digits (`١٢٣`) do not count. The
/// proper-noun rule is naive: any token starting with an upper-case letter
/// qualifies, sentence-initial words included.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    proper_noun_limit: usize,
}

impl EntityExtractor {
    /// Create an extractor reporting at most `proper_noun_limit` capitalized tokens
    pub fn new(proper_noun_limit: usize) -> Self {
        Self { proper_noun_limit }
    }

    /// Extract entities from `text`
    pub fn analyze(&self, text: &str) -> EntityFinding {
        info!("Extracting entities");

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let unique: HashSet<&str> = tokens.iter().copied().collect();

        let numbers = tokens
            .iter()
            .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
            .map(|token| token.to_string())
            .collect();

        let proper_nouns = tokens
            .iter()
            .filter(|token| token.chars().next().is_some_and(char::is_uppercase))
            .take(self.proper_noun_limit)
            .map(|token| token.to_string())
            .collect();

        EntityFinding {
            unique_words: unique.len(),
            total_words: tokens.len(),
            entities: Entities {
                numbers,
                proper_nouns,
            },
        }
    }
}
