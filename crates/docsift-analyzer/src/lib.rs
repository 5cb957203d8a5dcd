//! docsift Analyzer
//!
//! Runs a fixed pipeline of text analysis strategies over document content
//! and aggregates the findings into a single report.
//!
//! The analyzer provides:
//! - Sentiment polarity from configured indicator words
//! - Entity spotting (numbers, capitalized tokens, vocabulary size)
//! - Keyword ranking by frequency, stop words removed
//! - Optional bounded history of completed reports
//!
//! # Examples
//!
//! ```no_run
//! use docsift_analyzer::AiAnalyzer;
//! use docsift_domain::DocumentData;
//!
//! let mut analyzer = AiAnalyzer::default();
//! let outcome = analyzer.analyze(&DocumentData::new("Machine learning is great."));
//! assert!(outcome.is_success());
//! ```

#![warn(missing_docs)]

mod aggregator;
mod analyzer;
mod config;
mod entities;
mod error;
mod keywords;
mod sentiment;
mod strategy;


pub use aggregator::ReportAggregator;
pub use analyzer::AiAnalyzer;
pub use config::AnalyzerConfig;
pub use entities::EntityExtractor;
pub use error::AnalyzerError;
pub use keywords::KeywordExtractor;
pub use sentiment::SentimentAnalyzer;
pub use strategy::{default_strategies, Strategy};
