//! Sentiment polarity scoring.
//!
//! The recommendation engine only depends on the [`PolarityScorer`] trait,
//! so any analyzer that maps text to a polarity in `[-1.0, 1.0]` can be
//! plugged in. [`LexiconScorer`] is the built-in implementation.
//!
//! ```ignore
//! use sentiment::{LexiconScorer, PolarityScorer};
//!
//! let scorer = LexiconScorer::builtin()?;
//! assert!(scorer.score_text("A joyful uplifting tale") > 0.0);
//! ```

pub mod lexicon;

pub use lexicon::LexiconScorer;

use thiserror::Error;

/// Errors that can occur while preparing a scorer
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Invalid sentiment lexicon: {0}")]
    Lexicon(#[from] serde_json::Error),

    #[error("Lexicon weight for `{word}` is outside [-1, 1]: {value}")]
    WeightOutOfRange { word: String, value: f32 },
}

pub type Result<T> = std::result::Result<T, SentimentError>;

/// Anything that can rate the emotional tone of a text.
///
/// ## Contract
/// - Returns a value in `[-1.0, 1.0]`
/// - Positive means upbeat, negative means downbeat, `0.0` means neutral
///   or no signal
/// - Pure: the same text always yields the same score
pub trait PolarityScorer: Send + Sync {
    fn score_text(&self, text: &str) -> f32;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Box<S> {
    fn score_text(&self, text: &str) -> f32 {
        (**self).score_text(text)
    }
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for std::sync::Arc<S> {
    fn score_text(&self, text: &str) -> f32 {
        (**self).score_text(text)
    }
}
