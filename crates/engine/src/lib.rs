//! Mood-aware movie recommendations over a fixed catalog.
//!
//! [`RecommendationEngine`] ties the other crates together: it owns the
//! catalog, its lexical index and similarity matrix, and a sentiment scorer,
//! and answers [`RecommendationCriteria`] queries with [`ScoredCandidate`]s.

pub mod criteria;
pub mod recommender;

pub use criteria::{DEFAULT_TOP_N, RecommendationCriteria};
pub use recommender::{PolarityBand, RecommendationEngine, ScoredCandidate};
