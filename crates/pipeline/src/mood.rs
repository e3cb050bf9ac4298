//! Mood screening of scored candidates.
//!
//! A user's mood never drags recommendations down: downbeat movies are
//! only let through as a counter to a negative mood, upbeat and neutral
//! ones are always fine.

use sentiment::PolarityScorer;

/// Decides whether a movie's polarity suits the user's mood.
///
/// The mood polarity is computed once per query, not once per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoodScreen {
    mood_polarity: Option<f32>,
}

impl MoodScreen {
    /// Screen for an already-scored mood; `None` accepts everything
    pub fn new(mood_polarity: Option<f32>) -> Self {
        Self { mood_polarity }
    }

    /// Score the mood text (if any) with `scorer`
    pub fn from_mood<S: PolarityScorer + ?Sized>(mood: Option<&str>, scorer: &S) -> Self {
        let mood_polarity = mood.map(|text| scorer.score_text(text));
        if let Some(polarity) = mood_polarity {
            tracing::debug!("Mood polarity: {:.3}", polarity);
        }
        Self { mood_polarity }
    }

    pub fn mood_polarity(&self) -> Option<f32> {
        self.mood_polarity
    }

    /// Accept a movie with the given overview polarity.
    ///
    /// With a mood: accepted when the mood is negative and the movie is
    /// upbeat, or when the movie is not downbeat. Without a mood every
    /// polarity is accepted.
    pub fn accepts(&self, movie_polarity: f32) -> bool {
        match self.mood_polarity {
            Some(mood) => (mood < 0.0 && movie_polarity > 0.0) || movie_polarity >= 0.0,
            None => true,
        }
    }
}
