//! Core data structures for feedback analysis
//!
//! This module contains the fundamental data structures used throughout
//! the analyzer: the per-entry result and the aggregated batch result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound scores at or above this value are Positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this value are Negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Default number of entries in the top-words ranking
pub const DEFAULT_TOP_WORDS: usize = 12;

/// Sentiment class of a single piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All classes in display order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Classify a compound score.
    ///
    /// Both bounds are inclusive, leaving a neutral band of (-0.05, 0.05).
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single scored piece of feedback
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackItem {
    pub text: String,
    pub sentiment: Sentiment,
    pub score: f64,
}

impl FeedbackItem {
    pub fn new(text: String, score: f64) -> Self {
        Self {
            text,
            sentiment: Sentiment::from_score(score),
            score,
        }
    }
}

/// Number of items in one sentiment class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Share of each sentiment class, in percent rounded to one decimal
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentPercentages {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentPercentages {
    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }
}

/// A normalized token and how often it occurred in the batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Aggregated analysis of one batch of feedback.
///
/// Everything except `items` is derived from `items` (and their tokens),
/// so `sentiment_counts` always sums to `total`, which equals `items.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub items: Vec<FeedbackItem>,
    /// Classes present in the batch, most frequent first
    pub sentiment_counts: Vec<SentimentCount>,
    pub total: usize,
    pub percentages: SentimentPercentages,
    pub average_score: f64,
    pub top_words: Vec<WordFrequency>,
}

impl BatchResult {
    /// The result of analyzing an empty batch
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            sentiment_counts: Vec::new(),
            total: 0,
            percentages: SentimentPercentages::default(),
            average_score: 0.0,
            top_words: Vec::new(),
        }
    }

    /// Count of items in the given class, zero when the class is absent
    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.sentiment_counts
            .iter()
            .find(|c| c.sentiment == sentiment)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::empty()
    }
}
