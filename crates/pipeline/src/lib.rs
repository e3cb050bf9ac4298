//! Candidate selection for movie recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for structured criteria
//! - FilterPipeline for composing filters
//! - MoodScreen for matching scored candidates against the user's mood
//!
//! ## Architecture
//! Candidates flow through in stages:
//! 1. Filters remove items that fail the structured criteria (genre, rating)
//! 2. The caller scores each survivor's overview with a `PolarityScorer`
//! 3. MoodScreen keeps the polarities that suit the user's mood
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Candidate, FilterPipeline, MoodScreen};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenreSubstringFilter::new("comedy"))
//!     .add_filter(MinimumRatingFilter::new(8.0));
//!
//! let filtered = pipeline.apply(Candidate::all(&catalog));
//!
//! let screen = MoodScreen::from_mood(Some("gloomy"), &scorer);
//! let keep = screen.accepts(scorer.score_text(overview));
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod mood;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use mood::MoodScreen;
pub use traits::{Candidate, Filter};
