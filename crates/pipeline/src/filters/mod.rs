//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre_substring;
pub mod minimum_rating;

// Re-export for convenience
pub use genre_substring::GenreSubstringFilter;
pub use minimum_rating::MinimumRatingFilter;
