//! # Sentiment Lexicon
//!
//! Word valences plus the booster and negation vocabularies used by the
//! rule-based scorer.

use crate::utils::error::{AppError, AppResult};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_LEXICON: &str = include_str!("lexicon.tsv");

/// Scalar added (or subtracted) by a booster word
pub const BOOSTER_INCREMENT: f64 = 0.293;

/// Words that intensify the sentiment word that follows them
const BOOSTERS_UP: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
    "deeply", "enormously", "entirely", "especially", "exceptionally", "extremely",
    "fabulously", "fully", "greatly", "highly", "hugely", "incredibly", "intensely",
    "majorly", "more", "most", "particularly", "purely", "quite", "really",
    "remarkably", "so", "substantially", "thoroughly", "totally", "tremendously",
    "truly", "unbelievably", "unusually", "utterly", "very",
];

/// Words that soften the sentiment word that follows them
const BOOSTERS_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt",
    "never", "no", "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt",
    "shant", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt", "rarely",
    "seldom", "despite",
];

/// Valence table mapping lowercase words to scores on a -4..4 scale
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// The lexicon compiled into the binary
    pub fn builtin() -> AppResult<Self> {
        Self::parse(BUILTIN_LEXICON)
    }

    /// Load a lexicon file of `word<TAB>valence` lines.
    ///
    /// Extra tab-separated columns are ignored, so a standard VADER
    /// `vader_lexicon.txt` loads as-is.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let lexicon = Self::parse(&content)
            .map_err(|e| AppError::Config(format!("{} ({})", e, path.display())))?;
        info!(path = %path.display(), entries = lexicon.len(), "loaded custom lexicon");
        Ok(lexicon)
    }

    /// Parse lexicon content; blank lines and `#` comments are skipped
    pub fn parse(content: &str) -> AppResult<Self> {
        let mut valences = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let word = columns.next().map(str::trim).unwrap_or_default();
            let valence = columns
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite());

            match (word.is_empty(), valence) {
                (false, Some(valence)) => {
                    valences.insert(word.to_lowercase(), valence);
                }
                _ => {
                    return Err(AppError::Config(format!(
                        "Invalid lexicon entry on line {}: '{}'",
                        index + 1,
                        line
                    )));
                }
            }
        }

        if valences.is_empty() {
            return Err(AppError::Config("Lexicon contains no entries".to_string()));
        }

        debug!(entries = valences.len(), "parsed lexicon");
        Ok(Self { valences })
    }

    /// Valence of a lowercase word, if it carries sentiment
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.valences.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

/// Signed booster scalar for a lowercase word, if it is a booster
pub fn booster(word: &str) -> Option<f64> {
    if BOOSTERS_UP.contains(&word) {
        Some(BOOSTER_INCREMENT)
    } else if BOOSTERS_DOWN.contains(&word) {
        Some(-BOOSTER_INCREMENT)
    } else {
        None
    }
}

/// Whether a lowercase word negates the sentiment that follows it
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}
