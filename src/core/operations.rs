//! Core operations implementation
//!
//! This module provides the aggregator at the centre of the pipeline: it
//! scores and normalizes every feedback string of a batch and folds the
//! results into one [`BatchResult`].

use crate::config::Config;
use crate::core::{
    data::{
        BatchResult, FeedbackItem, Sentiment, SentimentCount, SentimentPercentages, WordFrequency,
        DEFAULT_TOP_WORDS,
    },
    lexicon::Lexicon,
    normalizer::TextNormalizer,
    scorer::LexiconScorer,
    traits::PolarityScorer,
};
use crate::utils::error::AppResult;
use crate::utils::format::round_to;
use std::collections::HashMap;
use tracing::{debug, info};

/// Batch aggregator combining a scorer and a normalizer
///
/// Both collaborators are built once and reused for every batch; analysis
/// itself holds no state between calls.
pub struct FeedbackAnalyzer {
    normalizer: TextNormalizer,
    scorer: Box<dyn PolarityScorer>,
    top_words: usize,
}

impl FeedbackAnalyzer {
    /// Create an analyzer from its collaborators, ranking the default 12 top words
    pub fn new(normalizer: TextNormalizer, scorer: Box<dyn PolarityScorer>) -> Self {
        Self {
            normalizer,
            scorer,
            top_words: DEFAULT_TOP_WORDS,
        }
    }

    /// Build the analyzer described by the `[analysis]` configuration section
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let normalizer = TextNormalizer::with_extra_stopwords(&config.analysis.extra_stopwords)?;

        let lexicon = match &config.analysis.lexicon_file {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::builtin()?,
        };
        info!(
            lexicon_entries = lexicon.len(),
            stopwords = normalizer.stopword_count(),
            "analyzer ready"
        );

        Ok(Self::new(normalizer, Box::new(LexiconScorer::new(lexicon))).with_top_words(config.analysis.top_words))
    }

    /// Set how many entries the top-words ranking keeps (at least one)
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words.max(1);
        self
    }

    /// Analyze a batch of raw feedback strings.
    ///
    /// An empty batch yields [`BatchResult::empty`]; nothing here can fail.
    pub fn analyze<S: AsRef<str>>(&self, batch: &[S]) -> BatchResult {
        if batch.is_empty() {
            debug!("empty feedback batch");
            return BatchResult::empty();
        }

        let mut items = Vec::with_capacity(batch.len());
        let mut words = WordCounter::default();

        for feedback in batch {
            let text = feedback.as_ref();
            let score = self.scorer.polarity(text);
            items.push(FeedbackItem::new(text.to_string(), score));
            words.extend(self.normalizer.tokens(text));
        }

        let total = items.len();
        let sentiment_counts = count_sentiments(&items);
        let percentages = percentages(&sentiment_counts, total);
        let average_score = round_to(items.iter().map(|i| i.score).sum::<f64>() / total as f64, 3);
        let distinct_words = words.len();
        let top_words = words.most_common(self.top_words);

        debug!(total, distinct_words, average_score, "analyzed feedback batch");

        BatchResult {
            items,
            sentiment_counts,
            total,
            percentages,
            average_score,
            top_words,
        }
    }
}

/// Class counts ordered by count descending, ties by first appearance
fn count_sentiments(items: &[FeedbackItem]) -> Vec<SentimentCount> {
    let mut counts: Vec<SentimentCount> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|c| c.sentiment == item.sentiment) {
            Some(entry) => entry.count += 1,
            None => counts.push(SentimentCount {
                sentiment: item.sentiment,
                count: 1,
            }),
        }
    }
    // stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn percentages(counts: &[SentimentCount], total: usize) -> SentimentPercentages {
    if total == 0 {
        return SentimentPercentages::default();
    }
    let pct = |sentiment: Sentiment| {
        let count = counts
            .iter()
            .find(|c| c.sentiment == sentiment)
            .map(|c| c.count)
            .unwrap_or(0);
        round_to(100.0 * count as f64 / total as f64, 1)
    };
    SentimentPercentages {
        positive: pct(Sentiment::Positive),
        neutral: pct(Sentiment::Neutral),
        negative: pct(Sentiment::Negative),
    }
}

/// Multiset of tokens that remembers first-insertion order
#[derive(Default)]
struct WordCounter {
    index: HashMap<String, usize>,
    entries: Vec<WordFrequency>,
}

impl WordCounter {
    fn extend(&mut self, tokens: Vec<String>) {
        for token in tokens {
            match self.index.get(&token) {
                Some(&position) => self.entries[position].count += 1,
                None => {
                    self.index.insert(token.clone(), self.entries.len());
                    self.entries.push(WordFrequency {
                        word: token,
                        count: 1,
                    });
                }
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// The `n` most frequent words; equal counts keep first-occurrence order
    fn most_common(mut self, n: usize) -> Vec<WordFrequency> {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self.entries.truncate(n);
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_analyzer() -> FeedbackAnalyzer {
        let scorer = |text: &str| -> f64 {
            if text.contains("good") {
                0.5
            } else if text.contains("bad") {
                -0.5
            } else {
                0.0
            }
        };
        FeedbackAnalyzer::new(TextNormalizer::new().unwrap(), Box::new(scorer))
    }

    fn lexicon_analyzer() -> FeedbackAnalyzer {
        let scorer = LexiconScorer::new(Lexicon::builtin().unwrap());
        FeedbackAnalyzer::new(TextNormalizer::new().unwrap(), Box::new(scorer))
    }

    #[test]
    fn test_mixed_feedback_scenario() {
        let batch = ["I love this!", "This is terrible.", "It's okay I guess."];
        let result = lexicon_analyzer().analyze(&batch);

        assert_eq!(result.total, 3);
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.count(Sentiment::Positive), 1);
        assert_eq!(result.count(Sentiment::Negative), 1);
        assert_eq!(result.count(Sentiment::Neutral), 1);
        assert_eq!(result.percentages.positive, 33.3);
        assert_eq!(result.percentages.neutral, 33.3);
        assert_eq!(result.percentages.negative, 33.3);
        assert_eq!(result.average_score, 0.042);

        let words: Vec<&str> = result.top_words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["love", "terrible", "okay", "guess"]);
    }

    #[test]
    fn test_items_keep_input_order_and_text() {
        let batch = vec!["bad start".to_string(), "good end".to_string()];
        let result = keyword_analyzer().analyze(&batch);
        assert_eq!(result.items[0].text, "bad start");
        assert_eq!(result.items[0].sentiment, Sentiment::Negative);
        assert_eq!(result.items[1].text, "good end");
        assert_eq!(result.items[1].score, 0.5);
    }

    #[test]
    fn test_empty_batch() {
        let batch: Vec<String> = Vec::new();
        let result = keyword_analyzer().analyze(&batch);
        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
        assert!(result.sentiment_counts.is_empty());
        assert!(result.top_words.is_empty());
        assert_eq!(result.percentages, SentimentPercentages::default());
        assert_eq!(result.average_score, 0.0);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let batch = [
            "good", "good food", "bad", "meh", "bad service", "good value", "nothing to add",
        ];
        let result = keyword_analyzer().analyze(&batch);
        let counted: usize = result.sentiment_counts.iter().map(|c| c.count).sum();
        assert_eq!(counted, batch.len());
        assert_eq!(result.total, batch.len());
        assert_eq!(result.items.len(), batch.len());
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        for size in 1..=20 {
            let batch: Vec<String> = (0..size)
                .map(|i| match i % 3 {
                    0 => "good".to_string(),
                    1 => "bad".to_string(),
                    _ => "plain".to_string(),
                })
                .collect();
            let result = keyword_analyzer().analyze(&batch);
            let sum = result.percentages.sum();
            assert!((sum - 100.0).abs() <= 0.1 + 1e-9, "size {} summed to {}", size, sum);
        }
    }

    #[test]
    fn test_sentiment_counts_ordered_by_count_then_first_appearance() {
        let batch = ["plain", "bad", "good", "bad", "good"];
        let result = keyword_analyzer().analyze(&batch);
        let order: Vec<(Sentiment, usize)> = result
            .sentiment_counts
            .iter()
            .map(|c| (c.sentiment, c.count))
            .collect();
        assert_eq!(
            order,
            vec![
                (Sentiment::Negative, 2),
                (Sentiment::Positive, 2),
                (Sentiment::Neutral, 1)
            ]
        );
    }

    #[test]
    fn test_half_percentages_round_to_even() {
        let mut batch = vec!["good"];
        batch.extend(std::iter::repeat_n("plain", 15));
        let result = keyword_analyzer().analyze(&batch);
        assert_eq!(result.total, 16);
        assert_eq!(result.percentages.positive, 6.2);
        assert_eq!(result.percentages.neutral, 93.8);
    }

    #[test]
    fn test_half_average_rounds_to_even() {
        let scorer = |text: &str| -> f64 { if text == "up" { 0.125 } else { 0.0 } };
        let analyzer = FeedbackAnalyzer::new(TextNormalizer::new().unwrap(), Box::new(scorer));
        let result = analyzer.analyze(&["up", "flat"]);
        assert_eq!(result.average_score, 0.062);
    }

    #[test]
    fn test_absent_classes_are_not_listed() {
        let result = keyword_analyzer().analyze(&["good", "good stuff"]);
        assert_eq!(result.sentiment_counts.len(), 1);
        assert_eq!(result.percentages.positive, 100.0);
        assert_eq!(result.percentages.negative, 0.0);
        assert_eq!(result.average_score, 0.5);
    }

    #[test]
    fn test_top_words_limited_and_non_increasing() {
        let batch: Vec<String> = (0..30)
            .map(|i| format!("word{} word{} shared", i, i % 5))
            .collect();
        let result = keyword_analyzer().analyze(&batch);

        assert_eq!(result.top_words.len(), 12);
        assert_eq!(result.top_words[0].word, "shared");
        assert_eq!(result.top_words[0].count, 30);
        assert!(result.top_words.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_top_word_ties_follow_first_occurrence() {
        let batch = ["zebra apple", "mango zebra", "apple mango kiwi"];
        let result = keyword_analyzer().analyze(&batch);
        let ranked: Vec<(&str, usize)> = result
            .top_words
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect();
        assert_eq!(ranked, vec![("zebra", 2), ("apple", 2), ("mango", 2), ("kiwi", 1)]);
    }

    #[test]
    fn test_top_words_configurable() {
        let analyzer = keyword_analyzer().with_top_words(2);
        let result = analyzer.analyze(&["alpha beta gamma", "gamma delta"]);
        assert_eq!(result.top_words.len(), 2);
        assert_eq!(result.top_words[0].word, "gamma");

        let result = keyword_analyzer().with_top_words(0).analyze(&["alpha beta"]);
        assert_eq!(result.top_words.len(), 1);
    }

    #[test]
    fn test_no_surviving_tokens() {
        let result = keyword_analyzer().analyze(&["I am ok", "it is"]);
        assert_eq!(result.total, 2);
        assert!(result.top_words.iter().all(|w| w.word == "ok"));
        let result = keyword_analyzer().analyze(&["I am", "it is a"]);
        assert!(result.top_words.is_empty());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = lexicon_analyzer();
        let batch = [
            "Great support, fast answers https://help.example.com",
            "The app keeps crashing. Not happy!",
            "Delivery arrived on time",
        ];
        assert_eq!(analyzer.analyze(&batch), analyzer.analyze(&batch));
    }

    #[test]
    fn test_from_config_uses_extra_stopwords() {
        let mut config = Config::default();
        config.analysis.extra_stopwords = vec!["app".to_string()];
        config.analysis.top_words = 3;
        let analyzer = FeedbackAnalyzer::from_config(&config).unwrap();
        let result = analyzer.analyze(&["The app is great", "Great app, great team"]);
        assert_eq!(result.top_words[0].word, "great");
        assert_eq!(result.top_words[0].count, 3);
        assert!(result.top_words.iter().all(|w| w.word != "app"));
    }
}
