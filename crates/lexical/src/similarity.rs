//! Pairwise cosine similarity across every indexed document.

use crate::tfidf::LexicalIndex;
use data_loader::Position;
use rayon::prelude::*;
use tracing::debug;

/// Dense, symmetric `n × n` matrix of cosine similarities.
///
/// Entry `(i, j)` lies in `[0, 1]` because TF-IDF weights are non-negative.
/// The diagonal is `1.0` for documents with at least one term and `0.0`
/// for empty ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute all pairwise similarities, one row per parallel task
    pub fn compute(index: &LexicalIndex) -> Self {
        let vectors = index.vectors();
        let n = vectors.len();

        let values: Vec<f32> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                let row = &vectors[i];
                (0..n).map(move |j| {
                    if i == j {
                        if row.is_zero() { 0.0 } else { 1.0 }
                    } else {
                        // f32 rounding can land a hair above 1 for identical vectors
                        row.dot(&vectors[j]).clamp(0.0, 1.0)
                    }
                })
            })
            .collect();

        debug!("Computed {}x{} similarity matrix", n, n);
        Self { n, values }
    }

    /// Similarity between two catalog positions
    pub fn get(&self, i: Position, j: Position) -> Option<f32> {
        if i < self.n && j < self.n {
            Some(self.values[i * self.n + j])
        } else {
            None
        }
    }

    /// Every similarity for one position, indexed by the other position
    pub fn row(&self, i: Position) -> Option<&[f32]> {
        (i < self.n).then(|| &self.values[i * self.n..(i + 1) * self.n])
    }

    /// Number of rows (equals number of columns)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}
