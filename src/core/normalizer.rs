//! Text normalization for word-frequency analysis
//!
//! Normalized tokens only feed the top-words ranking; sentiment scoring
//! always sees the raw text.

use crate::core::stopwords::ENGLISH_STOPWORDS;
use crate::utils::error::{AppError, AppResult};
use regex::Regex;
use std::collections::HashSet;

/// Lowercases, strips URLs and punctuation, and filters stopwords
pub struct TextNormalizer {
    url_regex: Regex,
    non_alnum_regex: Regex,
    stopwords: HashSet<String>,
}

impl TextNormalizer {
    /// Create a normalizer with the built-in English stopword list
    pub fn new() -> AppResult<Self> {
        Self::with_extra_stopwords(&[])
    }

    /// Create a normalizer whose stopword set also contains `extra`
    pub fn with_extra_stopwords(extra: &[String]) -> AppResult<Self> {
        let url_regex = Regex::new(r"http\S+")
            .map_err(|e| AppError::System(format!("Invalid URL pattern: {}", e)))?;
        let non_alnum_regex = Regex::new(r"[^a-z0-9\s]")
            .map_err(|e| AppError::System(format!("Invalid character pattern: {}", e)))?;

        let stopwords = ENGLISH_STOPWORDS
            .iter()
            .map(|w| w.to_string())
            .chain(extra.iter().map(|w| w.trim().to_lowercase()))
            .filter(|w| !w.is_empty())
            .collect();

        Ok(Self {
            url_regex,
            non_alnum_regex,
            stopwords,
        })
    }

    /// Normalize one text into its surviving tokens, in order.
    ///
    /// Steps:
    /// 1. Lowercase
    /// 2. Remove `http...` runs up to the next whitespace
    /// 3. Replace everything outside `[a-z0-9\s]` with a space
    /// 4. Split on whitespace
    /// 5. Drop stopwords and tokens of one character or less
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowercase = text.to_lowercase();
        let no_urls = self.url_regex.replace_all(&lowercase, "");
        let clean = self.non_alnum_regex.replace_all(&no_urls, " ");

        clean
            .split_whitespace()
            .filter(|token| token.chars().count() > 1)
            .filter(|token| !self.stopwords.contains(*token))
            .map(String::from)
            .collect()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}
