//! # Recommendation Engine
//!
//! This module coordinates a recommendation query:
//! 1. Build a filter pipeline from the criteria (genre, minimum rating)
//! 2. Filter the catalog
//! 3. Shuffle the survivors
//! 4. Score each overview's polarity, skipping items without one
//! 5. Screen polarities against the user's mood
//! 6. Stop once the requested number of results is reached
//!
//! The lexical index and similarity matrix are built once, up front, and
//! exposed for inspection; ranking does not consult them.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

use data_loader::Catalog;
use lexical::{LexicalIndex, SimilarityMatrix};
use pipeline::filters::{GenreSubstringFilter, MinimumRatingFilter};
use pipeline::{Candidate, FilterPipeline, MoodScreen};
use sentiment::PolarityScorer;

use crate::criteria::RecommendationCriteria;

/// A recommended title with the polarity of its overview
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub title: String,
    pub polarity: f32,
}

impl ScoredCandidate {
    pub fn band(&self) -> PolarityBand {
        PolarityBand::from_polarity(self.polarity)
    }
}

/// Coarse label for a polarity, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarityBand {
    Positive,
    Neutral,
    Negative,
}

impl PolarityBand {
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > 0.0 {
            PolarityBand::Positive
        } else if polarity < 0.0 {
            PolarityBand::Negative
        } else {
            PolarityBand::Neutral
        }
    }
}

impl fmt::Display for PolarityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PolarityBand::Positive => "Positive",
            PolarityBand::Neutral => "Neutral",
            PolarityBand::Negative => "Negative",
        };
        f.write_str(label)
    }
}

/// Owns the catalog and everything derived from it.
///
/// All state is immutable after [`build`](Self::build), so one engine can
/// serve any number of queries, from any number of threads.
pub struct RecommendationEngine<S> {
    catalog: Catalog,
    lexical_index: LexicalIndex,
    similarity: SimilarityMatrix,
    scorer: S,
}

impl<S: PolarityScorer> RecommendationEngine<S> {
    /// Index a loaded catalog and compute its similarity matrix.
    ///
    /// # Arguments
    /// * `catalog` - The movies to recommend from
    /// * `scorer` - Sentiment scorer for overviews and moods
    #[instrument(skip_all, fields(items = catalog.len()))]
    pub fn build(catalog: Catalog, scorer: S) -> Self {
        let start_time = Instant::now();

        let lexical_index = LexicalIndex::build(catalog.items());
        let similarity = SimilarityMatrix::compute(&lexical_index);

        info!(
            "Engine ready: {} items, {} terms in {:.2?}",
            catalog.len(),
            lexical_index.vocabulary().len(),
            start_time.elapsed()
        );

        Self {
            catalog,
            lexical_index,
            similarity,
            scorer,
        }
    }

    /// Load a catalog file and build an engine over it
    pub fn load(path: &Path, scorer: S) -> Result<Self> {
        let catalog = Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
        Ok(Self::build(catalog, scorer))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lexical_index(&self) -> &LexicalIndex {
        &self.lexical_index
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Sorted, de-duplicated genre labels across the catalog
    pub fn list_genres(&self) -> Vec<String> {
        self.catalog.list_genres()
    }

    /// Cosine similarity between two titles, if both are in the catalog
    pub fn similarity_between(&self, first: &str, second: &str) -> Option<f32> {
        let i = self.catalog.position_of(first)?;
        let j = self.catalog.position_of(second)?;
        self.similarity.get(i, j)
    }

    /// Answer a query using the thread-local random generator.
    ///
    /// See [`recommend_with_rng`](Self::recommend_with_rng).
    pub fn recommend(&self, criteria: &RecommendationCriteria) -> Vec<ScoredCandidate> {
        self.recommend_with_rng(criteria, &mut rand::rng())
    }

    /// Answer a query, shuffling candidates with `rng`.
    ///
    /// # Returns
    /// At most `criteria.top_n()` results, in shuffled order. Fewer when the
    /// filtered pool runs out; empty when nothing qualifies.
    #[instrument(
        skip(self, criteria, rng),
        fields(
            genre = ?criteria.genre(),
            min_rating = ?criteria.min_rating(),
            top_n = criteria.top_n()
        )
    )]
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        criteria: &RecommendationCriteria,
        rng: &mut R,
    ) -> Vec<ScoredCandidate> {
        let start_time = Instant::now();

        let pipeline = FilterPipeline::new()
            .add_optional_filter(criteria.genre().map(GenreSubstringFilter::new))
            .add_optional_filter(criteria.min_rating().map(MinimumRatingFilter::new));

        let mut candidates = pipeline.apply(Candidate::all(&self.catalog));
        debug!("{} candidates passed the filters", candidates.len());

        candidates.shuffle(rng);

        // Mood is scored once per query
        let screen = MoodScreen::from_mood(criteria.mood(), &self.scorer);
        let top_n = criteria.top_n();

        let mut recommendations = Vec::with_capacity(top_n.min(candidates.len()));
        for candidate in candidates {
            if recommendations.len() >= top_n {
                break;
            }

            let Some(overview) = candidate.item.overview.as_deref() else {
                debug!("Skipping {:?}: no overview", candidate.item.title);
                continue;
            };

            let polarity = self.scorer.score_text(overview);
            if screen.accepts(polarity) {
                recommendations.push(ScoredCandidate {
                    title: candidate.item.title.clone(),
                    polarity,
                });
            }
        }

        info!(
            "Selected {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );

        recommendations
    }
}
