//! Filter to keep only movies whose genre field mentions the requested genre.
//!
//! Matching is a case-insensitive substring test on the raw genre field,
//! so "sci" matches "Sci-Fi" and "drama" matches "Crime, Drama".

use crate::traits::{Candidate, Filter};

/// Keeps candidates whose raw genre field contains the given text.
///
/// ## Algorithm
/// 1. Lowercase the requested genre once
/// 2. For each candidate, lowercase its genre field and test `contains`
/// 3. Items with no genre field are dropped
pub struct GenreSubstringFilter {
    needle: String,
}

impl GenreSubstringFilter {
    /// Create a new GenreSubstringFilter.
    ///
    /// # Arguments
    /// * `genre` - Text to look for, e.g. "comedy" or "Sci"
    pub fn new(genre: impl AsRef<str>) -> Self {
        Self {
            needle: genre.as_ref().to_lowercase(),
        }
    }
}

impl Filter for GenreSubstringFilter {
    fn name(&self) -> &str {
        "GenreSubstringFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        candidates
            .into_iter()
            .filter(|candidate| match candidate.item.genre.as_deref() {
                Some(genre) => genre.to_lowercase().contains(&self.needle),
                None => false, // Exclude if genre is absent
            })
            .collect()
    }
}
