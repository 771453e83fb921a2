use crate::core::data::Sentiment;
use crate::core::presenter::{ChartSeries, ReportView};
use crate::core::traits::ReportRenderer;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_datetime, format_percentage, format_score, single_line, truncate_string};
use crate::utils::pagination::get_terminal_size;
use colored::*;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;
const MIN_TEXT_WIDTH: usize = 20;
const MAX_TEXT_WIDTH: usize = 80;
const DEFAULT_TEXT_WIDTH: usize = 60;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn sentiment(sentiment: Sentiment, text: &str) -> ColoredString {
        match sentiment {
            Sentiment::Positive => text.bright_green(),
            Sentiment::Neutral => text.bright_yellow(),
            Sentiment::Negative => text.bright_red(),
        }
    }

    /// Color a score by the class it falls in
    pub fn score(score: f64, text: &str) -> ColoredString {
        Self::sentiment(Sentiment::from_score(score), text)
    }

    // Formatting helpers
    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) -> String {
        format!("{:>12}: {}", Self::label(label), color_fn(value))
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{}", Self::field_colored(label, value, color_fn));
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

/// Colored plain-text report for the terminal
pub struct TerminalRenderer {
    text_width: usize,
}

impl TerminalRenderer {
    pub fn new(text_width: usize) -> Self {
        Self {
            text_width: text_width.clamp(MIN_TEXT_WIDTH, MAX_TEXT_WIDTH),
        }
    }

    /// Size the feedback column to the current terminal
    pub fn for_terminal() -> Self {
        let width = get_terminal_size()
            .map(|(_, cols)| (cols as usize).saturating_sub(32))
            .unwrap_or(DEFAULT_TEXT_WIDTH);
        Self::new(width)
    }

    fn write_summary(&self, out: &mut String, view: &ReportView) -> std::fmt::Result {
        let summary = &view.summary;
        writeln!(out, "{}", OutputStyle::field_colored("Total", &summary.total.to_string(), OutputStyle::info))?;
        writeln!(
            out,
            "{}",
            OutputStyle::field_colored("Positive", &format_percentage(summary.positive_pct), |t| {
                OutputStyle::sentiment(Sentiment::Positive, t)
            })
        )?;
        writeln!(
            out,
            "{}",
            OutputStyle::field_colored("Neutral", &format_percentage(summary.neutral_pct), |t| {
                OutputStyle::sentiment(Sentiment::Neutral, t)
            })
        )?;
        writeln!(
            out,
            "{}",
            OutputStyle::field_colored("Negative", &format_percentage(summary.negative_pct), |t| {
                OutputStyle::sentiment(Sentiment::Negative, t)
            })
        )?;
        writeln!(
            out,
            "{}",
            OutputStyle::field_colored("Avg score", &format_score(summary.average_score), |t| {
                OutputStyle::score(summary.average_score, t)
            })
        )
    }

    /// Horizontal bar chart scaled to the largest value
    fn write_bars(
        &self,
        out: &mut String,
        series: &ChartSeries,
        color_fn: impl Fn(&str, &str) -> ColoredString,
    ) -> std::fmt::Result {
        let max = series.values.iter().copied().max().unwrap_or(0).max(1);
        let label_width = series
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);

        for (label, value) in series.labels.iter().zip(&series.values) {
            let len = (value * BAR_WIDTH).div_ceil(max);
            let bar = "█".repeat(len);
            writeln!(
                out,
                "  {:>width$} │{} {}",
                label,
                color_fn(label, &bar),
                OutputStyle::muted(&value.to_string()),
                width = label_width
            )?;
        }
        Ok(())
    }

    fn write_table(&self, out: &mut String, view: &ReportView) -> std::fmt::Result {
        let width = self.text_width;
        let rule = |left: &str, mid: &str, right: &str| {
            format!(
                "{}─{}─{}─{}─{}─{}─{}",
                left,
                "─".repeat(width),
                mid,
                "─".repeat(9),
                mid,
                "─".repeat(7),
                right
            )
        };

        writeln!(out, "{}", rule("┌", "┬", "┐"))?;
        writeln!(
            out,
            "│ {} │ {} │ {} │",
            OutputStyle::header(&format!("{:<width$}", "Feedback", width = width)),
            OutputStyle::header(&format!("{:<9}", "Sentiment")),
            OutputStyle::header(&format!("{:>7}", "Score")),
        )?;
        writeln!(out, "{}", rule("├", "┼", "┤"))?;

        for row in &view.rows {
            let text = truncate_string(&single_line(&row.text), width);
            writeln!(
                out,
                "│ {} │ {} │ {} │",
                OutputStyle::content(&format!("{:<width$}", text, width = width)),
                OutputStyle::sentiment(row.sentiment, &format!("{:<9}", row.sentiment.as_str())),
                OutputStyle::sentiment(row.sentiment, &format!("{:>7}", row.score)),
            )?;
        }

        writeln!(out, "{}", rule("└", "┴", "┘"))
    }

    fn write_report(&self, out: &mut String, view: &ReportView) -> std::fmt::Result {
        writeln!(out, "{}", OutputStyle::title("📊 Feedback Sentiment Report"))?;
        writeln!(out, "{}", OutputStyle::header_separator())?;
        self.write_summary(out, view)?;

        if view.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", OutputStyle::muted("No feedback entries were analyzed."))?;
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", OutputStyle::header("Sentiment distribution"))?;
        self.write_bars(out, &view.sentiment_chart, |label, bar| match label {
            "Positive" => OutputStyle::sentiment(Sentiment::Positive, bar),
            "Negative" => OutputStyle::sentiment(Sentiment::Negative, bar),
            _ => OutputStyle::sentiment(Sentiment::Neutral, bar),
        })?;

        writeln!(out)?;
        writeln!(out, "{}", OutputStyle::header("Top words"))?;
        if view.word_chart.labels.is_empty() {
            writeln!(out, "  {}", OutputStyle::muted("No words left after filtering."))?;
        } else {
            self.write_bars(out, &view.word_chart, |_, bar| OutputStyle::info(bar))?;
        }

        writeln!(out)?;
        writeln!(out, "{}", OutputStyle::header("Detailed results"))?;
        self.write_table(out, view)?;
        writeln!(
            out,
            "{}",
            OutputStyle::muted(&format!("Generated {}", format_datetime(&view.generated_at)))
        )
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_WIDTH)
    }
}

impl ReportRenderer for TerminalRenderer {
    fn render(&self, view: &ReportView) -> AppResult<String> {
        let mut out = String::new();
        self.write_report(&mut out, view)
            .map_err(|e| AppError::System(format!("Failed to format report: {}", e)))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{BatchResult, FeedbackItem, SentimentCount, SentimentPercentages, WordFrequency};

    fn view() -> ReportView {
        let result = BatchResult {
            items: vec![
                FeedbackItem::new("Amazing support\nteam".to_string(), 0.5859),
                FeedbackItem::new("x".repeat(200), -0.3),
            ],
            sentiment_counts: vec![
                SentimentCount {
                    sentiment: Sentiment::Positive,
                    count: 1,
                },
                SentimentCount {
                    sentiment: Sentiment::Negative,
                    count: 1,
                },
            ],
            total: 2,
            percentages: SentimentPercentages {
                positive: 50.0,
                neutral: 0.0,
                negative: 50.0,
            },
            average_score: 0.143,
            top_words: vec![WordFrequency {
                word: "support".to_string(),
                count: 1,
            }],
        };
        ReportView::from_result(&result)
    }

    #[test]
    fn test_renders_summary_and_sections() {
        colored::control::set_override(false);
        let out = TerminalRenderer::new(40).render(&view()).unwrap();
        assert!(out.contains("Feedback Sentiment Report"));
        assert!(out.contains("50.0%"));
        assert!(out.contains("0.143"));
        assert!(out.contains("Top words"));
        assert!(out.contains("support │"));
        assert!(out.contains("Detailed results"));
        assert!(out.contains("Amazing support team"));
        assert!(out.contains("-0.300"));
    }

    #[test]
    fn test_long_feedback_is_truncated_to_column() {
        colored::control::set_override(false);
        let out = TerminalRenderer::new(40).render(&view()).unwrap();
        assert!(out.contains(&format!("{}...", "x".repeat(37))));
        assert!(!out.contains(&"x".repeat(41)));
    }

    #[test]
    fn test_empty_report() {
        colored::control::set_override(false);
        let out = TerminalRenderer::default()
            .render(&ReportView::from_result(&BatchResult::empty()))
            .unwrap();
        assert!(out.contains("No feedback entries were analyzed."));
        assert!(!out.contains("Detailed results"));
    }

    #[test]
    fn test_text_width_is_clamped() {
        assert_eq!(TerminalRenderer::new(5).text_width, MIN_TEXT_WIDTH);
        assert_eq!(TerminalRenderer::new(500).text_width, MAX_TEXT_WIDTH);
    }
}
