//! Feedback Analyzer - customer feedback sentiment analysis
//!
//! This library scores free-text feedback with a rule-based lexicon scorer,
//! aggregates a batch into sentiment statistics and word frequencies, and
//! renders the result for the terminal, as JSON, or as an HTML page.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod source;
pub mod utils;

// Re-export core types and traits for easier use
pub use core::{
    data::{BatchResult, FeedbackItem, Sentiment},
    lexicon::Lexicon,
    normalizer::TextNormalizer,
    operations::FeedbackAnalyzer,
    presenter::ReportView,
    scorer::LexiconScorer,
    traits::{FeedbackSource, PolarityScorer, ReportRenderer},
};
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
