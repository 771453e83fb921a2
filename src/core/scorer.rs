//! # Lexicon Scorer
//!
//! Rule-based compound polarity scoring in the style of VADER: word
//! valences adjusted for boosters, negation, capitalisation, contrastive
//! "but" and punctuation emphasis, then squashed into [-1, 1].

use crate::core::lexicon::{self, Lexicon};
use crate::core::traits::PolarityScorer;
use crate::utils::format::round_to;

/// Added to a sentiment word written in caps amid non-caps text
const CAPS_INCREMENT: f64 = 0.733;

/// Multiplier applied to a negated sentiment word
const NEGATION_SCALAR: f64 = -0.74;

/// Normalization constant approximating the max expected raw sum
const NORMALIZATION_ALPHA: f64 = 15.0;

/// How many preceding tokens are checked for boosters and negations
const LOOKBACK: usize = 3;

/// Applied instead of negation in "never so good" style phrases
const NEVER_SO_SCALAR: f64 = 1.25;

const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// Compound polarity scorer backed by a [`Lexicon`]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score a text; returns 0.0 when no sentiment word is found
    pub fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let cap_differential = has_cap_differential(&tokens);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let mut sentiments: Vec<f64> = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            sentiments.push(self.token_valence(i, &tokens, &lowered, cap_differential));
        }

        apply_contrast(&lowered, &mut sentiments);

        let sum: f64 = sentiments.iter().sum();
        let emphasis = punctuation_emphasis(text);
        let sum = if sum > 0.0 {
            sum + emphasis
        } else if sum < 0.0 {
            sum - emphasis
        } else {
            sum
        };

        round_to(normalize(sum), 4)
    }

    fn token_valence(
        &self,
        i: usize,
        tokens: &[String],
        lowered: &[String],
        cap_differential: bool,
    ) -> f64 {
        let word = lowered[i].as_str();

        if lexicon::booster(word).is_some() {
            return 0.0;
        }
        // "kind of" is a hedge, not kindness
        if word == "kind" && lowered.get(i + 1).map(String::as_str) == Some("of") {
            return 0.0;
        }

        let Some(mut valence) = self.lexicon.valence(word) else {
            return 0.0;
        };

        if cap_differential && is_shouting(&tokens[i]) {
            valence += CAPS_INCREMENT * valence.signum();
        }

        for distance in 1..=LOOKBACK.min(i) {
            let prev = i - distance;
            if self.lexicon.contains(&lowered[prev]) {
                continue;
            }
            let mut scalar = booster_scalar(&lowered[prev], &tokens[prev], valence, cap_differential);
            if distance == 2 {
                scalar *= 0.95;
            } else if distance == 3 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lowered, i, distance);
        }

        valence
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.compound(text)
    }
}

/// Split on whitespace and trim surrounding punctuation, keeping case
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// A token is shouting when every letter in it is uppercase
fn is_shouting(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// True when some, but not all, tokens are written in caps
fn has_cap_differential(tokens: &[String]) -> bool {
    let shouting = tokens.iter().filter(|t| is_shouting(t)).count();
    shouting > 0 && shouting < tokens.len()
}

fn booster_scalar(word: &str, original: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(mut scalar) = lexicon::booster(word) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_differential && is_shouting(original) {
        scalar += CAPS_INCREMENT * valence.signum();
    }
    scalar
}

/// Flip a valence negated by the token `distance` places before `i`.
///
/// "never so" and "never this" intensify rather than negate, and
/// "without doubt" leaves the valence alone.
fn negation_check(valence: f64, lowered: &[String], i: usize, distance: usize) -> f64 {
    let prev = lowered[i - distance].as_str();
    if distance > 1 {
        let next = lowered[i - distance + 1].as_str();
        if prev == "never" && (next == "so" || next == "this") {
            return valence * NEVER_SO_SCALAR;
        }
        if prev == "without" && next == "doubt" {
            return valence;
        }
    }
    if lexicon::is_negation(prev) {
        valence * NEGATION_SCALAR
    } else {
        valence
    }
}

/// Halve sentiment before the first "but" and amplify what follows it
fn apply_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *sentiment *= 0.5;
        } else if i > pivot {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let exclamation_emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;

    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamation_emphasis + question_emphasis
}

/// Squash an unbounded sum into [-1, 1]
fn normalize(sum: f64) -> f64 {
    let score = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    score.clamp(-1.0, 1.0)
}
