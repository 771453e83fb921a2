//! Report presentation
//!
//! Turns a [`BatchResult`] into the flat, display-ready view every renderer
//! consumes. Nothing is recomputed here: numbers pass through unchanged and
//! only per-item scores are formatted for display.

use crate::core::data::{BatchResult, Sentiment};
use crate::utils::format::format_score;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One row of the detailed results table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub text: String,
    pub sentiment: Sentiment,
    /// Score with three decimals
    pub score: String,
}

/// Parallel label/value arrays for a chart
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
    pub average_score: f64,
}

/// Everything a renderer needs to draw the report
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub summary: ReportSummary,
    pub rows: Vec<ReportRow>,
    pub sentiment_chart: ChartSeries,
    pub word_chart: ChartSeries,
    #[serde(serialize_with = "crate::utils::format::serialize")]
    pub generated_at: DateTime<Local>,
}

impl ReportView {
    pub fn from_result(result: &BatchResult) -> Self {
        Self::at(result, Local::now())
    }

    /// Build the view with an explicit generation time
    pub fn at(result: &BatchResult, generated_at: DateTime<Local>) -> Self {
        let rows = result
            .items
            .iter()
            .map(|item| ReportRow {
                text: item.text.clone(),
                sentiment: item.sentiment,
                score: format_score(item.score),
            })
            .collect();

        let sentiment_chart = ChartSeries {
            labels: result
                .sentiment_counts
                .iter()
                .map(|c| c.sentiment.to_string())
                .collect(),
            values: result.sentiment_counts.iter().map(|c| c.count).collect(),
        };

        let word_chart = ChartSeries {
            labels: result.top_words.iter().map(|w| w.word.clone()).collect(),
            values: result.top_words.iter().map(|w| w.count).collect(),
        };

        let summary = ReportSummary {
            total: result.total,
            positive_pct: result.percentages.positive,
            neutral_pct: result.percentages.neutral,
            negative_pct: result.percentages.negative,
            average_score: result.average_score,
        };

        Self {
            summary,
            rows,
            sentiment_chart,
            word_chart,
            generated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{
        FeedbackItem, SentimentCount, SentimentPercentages, WordFrequency,
    };

    fn sample_result() -> BatchResult {
        BatchResult {
            items: vec![
                FeedbackItem::new("I love this!".to_string(), 0.6696),
                FeedbackItem::new("This is terrible.".to_string(), -0.5423),
                FeedbackItem::new("Love it".to_string(), 0.6369),
            ],
            sentiment_counts: vec![
                SentimentCount {
                    sentiment: Sentiment::Positive,
                    count: 2,
                },
                SentimentCount {
                    sentiment: Sentiment::Negative,
                    count: 1,
                },
            ],
            total: 3,
            percentages: SentimentPercentages {
                positive: 66.7,
                neutral: 0.0,
                negative: 33.3,
            },
            average_score: 0.255,
            top_words: vec![
                WordFrequency {
                    word: "love".to_string(),
                    count: 2,
                },
                WordFrequency {
                    word: "terrible".to_string(),
                    count: 1,
                },
            ],
        }
    }

    #[test]
    fn test_rows_pass_through_with_formatted_scores() {
        let view = ReportView::from_result(&sample_result());
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].text, "I love this!");
        assert_eq!(view.rows[0].score, "0.670");
        assert_eq!(view.rows[1].sentiment, Sentiment::Negative);
        assert_eq!(view.rows[1].score, "-0.542");
    }

    #[test]
    fn test_chart_series() {
        let view = ReportView::from_result(&sample_result());
        assert_eq!(view.sentiment_chart.labels, vec!["Positive", "Negative"]);
        assert_eq!(view.sentiment_chart.values, vec![2, 1]);
        assert_eq!(view.word_chart.labels, vec!["love", "terrible"]);
        assert_eq!(view.word_chart.values, vec![2, 1]);
    }

    #[test]
    fn test_summary_is_exact_pass_through() {
        let view = ReportView::from_result(&sample_result());
        assert_eq!(
            view.summary,
            ReportSummary {
                total: 3,
                positive_pct: 66.7,
                neutral_pct: 0.0,
                negative_pct: 33.3,
                average_score: 0.255,
            }
        );
    }

    #[test]
    fn test_empty_result() {
        let view = ReportView::from_result(&BatchResult::empty());
        assert!(view.is_empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.sentiment_chart, ChartSeries::default());
        assert_eq!(view.word_chart, ChartSeries::default());
    }

    #[test]
    fn test_serializes_generated_at_as_text() {
        use chrono::TimeZone;
        let at = Local.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap();
        let view = ReportView::at(&BatchResult::empty(), at);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["generated_at"], "2025-03-04 10:00:00");
        assert_eq!(json["summary"]["total"], 0);
    }
}
