//! Core trait definitions for feedback analysis
//!
//! These traits are the seams of the pipeline: where feedback comes from,
//! how a text is scored, and where a finished report goes.

use crate::core::presenter::ReportView;
use crate::utils::error::AppResult;

/// Polarity scoring of a raw feedback text
///
/// Implementations must return a compound score in `[-1.0, 1.0]`. The
/// Positive/Neutral/Negative thresholds are applied by the caller, so any
/// scorer honouring this contract can be swapped in.
pub trait PolarityScorer {
    /// Compound polarity of the text, from -1.0 (most negative) to 1.0
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// A source of one batch of feedback strings
///
/// `Ok(None)` means the source had nothing to analyze, which is not an
/// error: the caller returns to its entry state instead of aggregating.
pub trait FeedbackSource {
    /// Produce the whole batch, or fail before any analysis starts
    fn load_batch(&self) -> AppResult<Option<Vec<String>>>;
}

/// Output of a formatted report
pub trait ReportRenderer {
    /// Render the view into its final textual form
    fn render(&self, view: &ReportView) -> AppResult<String>;
}
