//! Lexicon-based polarity scoring.
//!
//! ## Algorithm
//! 1. Tokenize into lowercase words (apostrophes kept, so "isn't" survives)
//! 2. Every word found in the lexicon is an assessment with its polarity
//! 3. An intensifier directly before the word scales it ("very good")
//! 4. A negator up to three words before the word flips and dampens it
//!    (x -0.5), unless another assessment came in between
//! 5. Text polarity = mean of all assessments, clamped to [-1, 1];
//!    text without assessments scores 0.0

use crate::{PolarityScorer, Result, SentimentError};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

const BUILTIN_LEXICON: &str = include_str!("../data/lexicon.json");

/// How many following words a negator reaches
const NEGATION_WINDOW: usize = 3;

/// Multiplier applied to a negated assessment
const NEGATION_FACTOR: f32 = -0.5;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "without", "isn't", "wasn't", "aren't", "weren't",
    "don't", "doesn't", "didn't", "can't", "cannot", "couldn't", "won't", "wouldn't", "hardly",
];

#[derive(Debug, Deserialize)]
struct LexiconFile {
    polarity: HashMap<String, f32>,
    #[serde(default)]
    intensifiers: HashMap<String, f32>,
}

/// Scores text against a word-polarity lexicon
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    polarity: HashMap<String, f32>,
    intensifiers: HashMap<String, f32>,
}

impl LexiconScorer {
    /// Scorer backed by the lexicon shipped with this crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LEXICON)
    }

    /// Parse a lexicon of the form
    /// `{"polarity": {"word": 0.8, ...}, "intensifiers": {"very": 1.3, ...}}`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;

        for (word, &value) in &file.polarity {
            if !(-1.0..=1.0).contains(&value) {
                return Err(SentimentError::WeightOutOfRange {
                    word: word.clone(),
                    value,
                });
            }
        }

        debug!(
            "Loaded sentiment lexicon: {} words, {} intensifiers",
            file.polarity.len(),
            file.intensifiers.len()
        );

        Ok(Self {
            polarity: file.polarity,
            intensifiers: file.intensifiers,
        })
    }

    /// Number of opinion words in the lexicon
    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }

    /// Individual adjusted assessments, in text order
    fn assess(&self, text: &str) -> Vec<f32> {
        let mut assessments = Vec::new();
        let mut negation_left = 0usize;
        let mut intensity = 1.0f32;

        for token in tokenize(text) {
            if is_negator(&token) {
                negation_left = NEGATION_WINDOW;
                intensity = 1.0;
                continue;
            }

            if let Some(&base) = self.polarity.get(&token) {
                let mut value = base * intensity;
                if negation_left > 0 {
                    value *= NEGATION_FACTOR;
                }
                assessments.push(value.clamp(-1.0, 1.0));
                negation_left = 0;
                intensity = 1.0;
                continue;
            }

            negation_left = negation_left.saturating_sub(1);
            intensity = self.intensifiers.get(&token).copied().unwrap_or(1.0);
        }

        assessments
    }
}

impl PolarityScorer for LexiconScorer {
    fn score_text(&self, text: &str) -> f32 {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return 0.0;
        }
        let mean = assessments.iter().sum::<f32>() / assessments.len() as f32;
        mean.clamp(-1.0, 1.0)
    }
}

/// Lowercase word tokens; apostrophes and hyphens stay inside words
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconScorer {
        LexiconScorer::builtin().unwrap()
    }

    #[test]
    fn test_builtin_lexicon_loads() {
        assert!(scorer().len() > 100);
    }

    #[test]
    fn test_positive_and_negative_text() {
        let s = scorer();

        assert!(s.score_text("A joyful uplifting tale") > 0.0);
        assert!(s.score_text("A tragic and hopeless story") < 0.0);
        assert!(s.score_text("I feel terrible and hopeless") < 0.0);
    }

    #[test]
    fn test_no_signal_is_neutral() {
        let s = scorer();

        assert_eq!(s.score_text("A man walks to the station"), 0.0);
        assert_eq!(s.score_text(""), 0.0);
    }

    #[test]
    fn test_mean_of_assessments() {
        let s = LexiconScorer::from_json(r#"{"polarity": {"good": 0.6, "bad": -0.2}}"#).unwrap();

        assert!((s.score_text("good and bad") - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_intensifier_scales_next_word() {
        let s = LexiconScorer::from_json(
            r#"{"polarity": {"good": 0.5}, "intensifiers": {"very": 1.5}}"#,
        )
        .unwrap();

        assert!((s.score_text("very good") - 0.75).abs() < 1e-6);
        // Only the word right after the intensifier
        assert!((s.score_text("very nice and good") - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let s = LexiconScorer::from_json(r#"{"polarity": {"good": 0.8, "bad": -0.6}}"#).unwrap();

        assert!((s.score_text("not good") + 0.4).abs() < 1e-6);
        assert!((s.score_text("it wasn't a bad film") - 0.3).abs() < 1e-6);
        // Negation is consumed by the first opinion word
        assert!((s.score_text("not good, bad") - (-0.4 - 0.6) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_negation_window_expires() {
        let s = LexiconScorer::from_json(r#"{"polarity": {"good": 0.8}}"#).unwrap();

        assert!((s.score_text("not that it matters much, good") - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_result_stays_in_range() {
        let s = LexiconScorer::from_json(
            r#"{"polarity": {"perfect": 1.0}, "intensifiers": {"utterly": 1.5}}"#,
        )
        .unwrap();

        assert_eq!(s.score_text("utterly perfect"), 1.0);
    }

    #[test]
    fn test_rejects_out_of_range_weight() {
        let err = LexiconScorer::from_json(r#"{"polarity": {"best": 1.5}}"#).unwrap_err();
        assert!(matches!(err, SentimentError::WeightOutOfRange { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            LexiconScorer::from_json("{polarity"),
            Err(SentimentError::Lexicon(_))
        ));
    }
}
