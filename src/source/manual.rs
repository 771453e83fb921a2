use crate::core::traits::FeedbackSource;
use crate::utils::error::AppResult;

/// A single piece of feedback typed by the user
pub struct ManualEntry {
    text: String,
}

impl ManualEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl FeedbackSource for ManualEntry {
    /// Blank or whitespace-only text is nothing to analyze.
    /// Otherwise the raw text, untrimmed, is the whole batch.
    fn load_batch(&self) -> AppResult<Option<Vec<String>>> {
        if self.text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(vec![self.text.clone()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_becomes_single_item_batch() {
        let batch = ManualEntry::new("  Great app!\n").load_batch().unwrap();
        assert_eq!(batch, Some(vec!["  Great app!\n".to_string()]));
    }

    #[test]
    fn test_blank_text_is_nothing_to_analyze() {
        assert_eq!(ManualEntry::new("").load_batch().unwrap(), None);
        assert_eq!(ManualEntry::new(" \t\n ").load_batch().unwrap(), None);
    }
}
