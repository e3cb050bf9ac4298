//! Query input for the recommendation engine.

use tracing::warn;

/// Result count used when none (or a nonsensical one) is requested
pub const DEFAULT_TOP_N: usize = 5;

/// What the user asked for.
///
/// Every criterion is optional except the result count, which is always
/// at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCriteria {
    genre: Option<String>,
    mood: Option<String>,
    min_rating: Option<f32>,
    top_n: usize,
}

impl RecommendationCriteria {
    /// No filters, no mood, [`DEFAULT_TOP_N`] results
    pub fn new() -> Self {
        Self {
            genre: None,
            mood: None,
            min_rating: None,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Genre substring to match, case-insensitive. Blank text is ignored.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = non_blank(genre.into());
        self
    }

    /// Free text describing how the user feels. Blank text is ignored.
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = non_blank(mood.into());
        self
    }

    /// Minimum IMDb rating, inclusive
    ///
    /// Any finite threshold applies the filter, `0.0` included, so unrated
    /// movies are excluded whenever a rating is set. Only leaving the rating
    /// unset keeps them.
    pub fn with_min_rating(mut self, rating: f32) -> Self {
        if rating.is_finite() {
            self.min_rating = Some(rating);
        } else {
            warn!("Ignoring non-finite minimum rating: {}", rating);
            self.min_rating = None;
        }
        self
    }

    /// Maximum number of results; zero falls back to [`DEFAULT_TOP_N`]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        if top_n == 0 {
            warn!("Result count must be positive, using {}", DEFAULT_TOP_N);
            self.top_n = DEFAULT_TOP_N;
        } else {
            self.top_n = top_n;
        }
        self
    }

    /// Build criteria from raw user input, as typed at a prompt.
    ///
    /// Blank fields are absent. A rating that doesn't parse is dropped and
    /// a count that doesn't parse (or is below one) becomes
    /// [`DEFAULT_TOP_N`]; both are logged rather than rejected.
    pub fn from_raw(
        genre: Option<&str>,
        mood: Option<&str>,
        rating: Option<&str>,
        top_n: Option<&str>,
    ) -> Self {
        let mut criteria = Self::new();

        if let Some(genre) = genre {
            criteria = criteria.with_genre(genre);
        }
        if let Some(mood) = mood {
            criteria = criteria.with_mood(mood);
        }

        if let Some(raw) = rating.map(str::trim).filter(|r| !r.is_empty()) {
            match raw.parse::<f32>() {
                Ok(value) => criteria = criteria.with_min_rating(value),
                Err(_) => warn!("Invalid minimum rating {:?}, skipping rating filter", raw),
            }
        }

        if let Some(raw) = top_n.map(str::trim).filter(|n| !n.is_empty()) {
            match raw.parse::<i64>() {
                Ok(value) if value >= 1 => {
                    criteria = criteria.with_top_n(usize::try_from(value).unwrap_or(usize::MAX))
                }
                _ => warn!(
                    "Invalid result count {:?}, using {}",
                    raw, DEFAULT_TOP_N
                ),
            }
        }

        criteria
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    pub fn min_rating(&self) -> Option<f32> {
        self.min_rating
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }
}

impl Default for RecommendationCriteria {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
