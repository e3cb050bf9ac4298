//! Filter to ensure minimum quality threshold.
//!
//! Removes movies rated below the requested IMDb score, ensuring we only
//! recommend quality content.

use crate::traits::{Candidate, Filter};

/// Removes candidates below a rating threshold.
///
/// Items without a rating can't be shown to meet the threshold, so they
/// are removed as well.
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum IMDb rating, inclusive (e.g. 8.0)
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .item
                    .rating
                    .is_some_and(|rating| rating >= self.min_rating)
            })
            .collect()
    }
}
