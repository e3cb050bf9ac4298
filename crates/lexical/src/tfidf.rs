//! TF-IDF vector space over the catalog's combined text.
//!
//! ## Algorithm
//! 1. Tokenize every document (lowercase, stop-words removed)
//! 2. Build a sorted vocabulary of every surviving term
//! 3. Count document frequency per term
//! 4. weight(t, d) = count(t, d) * idf(t), with the smoothed
//!    idf(t) = ln((1 + N) / (1 + df(t))) + 1
//! 5. L2-normalize each document vector
//!
//! Vectors are sparse: only non-zero weights are stored, sorted by term id.

use crate::tokenizer::tokenize;
use data_loader::{CatalogItem, Position};
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, instrument};

/// Column index of a term in the vocabulary
pub type TermId = usize;

/// One L2-normalized TF-IDF vector, stored sparsely
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexicalVector {
    entries: Vec<(TermId, f32)>,
}

impl LexicalVector {
    /// Non-zero `(term, weight)` pairs in ascending term order
    pub fn entries(&self) -> &[(TermId, f32)] {
        &self.entries
    }

    /// Weight of a single term (0.0 when absent)
    pub fn weight(&self, term: TermId) -> f32 {
        self.entries
            .binary_search_by_key(&term, |&(id, _)| id)
            .map(|idx| self.entries[idx].1)
            .unwrap_or(0.0)
    }

    /// True for documents that had no indexable terms
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product with another vector; equals cosine similarity because
    /// both operands are unit length (or zero)
    pub fn dot(&self, other: &LexicalVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            if a_id == b_id {
                sum += a_w * b_w;
                i += 1;
                j += 1;
            } else if a_id < b_id {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }
}

/// Vocabulary plus one vector per catalog item, in catalog order.
///
/// Rebuilt from scratch whenever the catalog changes; there is no
/// incremental update.
#[derive(Debug, Clone, Default)]
pub struct LexicalIndex {
    vocabulary: Vec<String>,
    term_ids: HashMap<String, TermId>,
    idf: Vec<f32>,
    vectors: Vec<LexicalVector>,
}

impl LexicalIndex {
    /// Build the index over the `combined_text` of every item
    #[instrument(skip(items), fields(documents = items.len()))]
    pub fn build(items: &[CatalogItem]) -> Self {
        let documents: Vec<&str> = items.iter().map(|item| item.combined_text()).collect();
        Self::from_documents(&documents)
    }

    /// Build the index over raw documents
    pub fn from_documents(documents: &[&str]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.par_iter().map(|doc| tokenize(doc)).collect();

        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        let term_ids: HashMap<String, TermId> = vocabulary
            .iter()
            .enumerate()
            .map(|(id, term)| (term.clone(), id))
            .collect();

        let mut doc_frequency = vec![0u32; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<TermId> = tokens.iter().map(|t| term_ids[t]).collect();
            for id in unique {
                doc_frequency[id] += 1;
            }
        }

        let n = documents.len() as f32;
        let idf: Vec<f32> = doc_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let vectors: Vec<LexicalVector> = tokenized
            .par_iter()
            .map(|tokens| vectorize(tokens, &term_ids, &idf))
            .collect();

        debug!(
            "Built lexical index: {} documents, {} terms",
            vectors.len(),
            vocabulary.len()
        );

        Self {
            vocabulary,
            term_ids,
            idf,
            vectors,
        }
    }

    /// Sorted vocabulary; a term's position is its `TermId`
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.term_ids.get(term).copied()
    }

    /// Smoothed inverse document frequency of a term
    pub fn idf(&self, term: TermId) -> Option<f32> {
        self.idf.get(term).copied()
    }

    pub fn vector(&self, position: Position) -> Option<&LexicalVector> {
        self.vectors.get(position)
    }

    pub fn vectors(&self) -> &[LexicalVector] {
        &self.vectors
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Raw term counts times idf, then L2-normalized
fn vectorize(tokens: &[String], term_ids: &HashMap<String, TermId>, idf: &[f32]) -> LexicalVector {
    let mut counts: HashMap<TermId, u32> = HashMap::new();
    for token in tokens {
        *counts.entry(term_ids[token]).or_insert(0) += 1;
    }

    let mut entries: Vec<(TermId, f32)> = counts
        .into_iter()
        .map(|(id, count)| (id, count as f32 * idf[id]))
        .collect();
    entries.sort_unstable_by_key(|&(id, _)| id);

    let norm = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for entry in &mut entries {
            entry.1 /= norm;
        }
    }

    LexicalVector { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn test_vocabulary_sorted_without_stop_words() {
        let index = LexicalIndex::from_documents(&["the zebra and the apple", "an apple a day"]);

        assert_eq!(index.vocabulary(), &["apple", "day", "zebra"]);
        assert_eq!(index.term_id("zebra"), Some(2));
        assert_eq!(index.term_id("the"), None);
    }

    #[test]
    fn test_smoothed_idf() {
        let index = LexicalIndex::from_documents(&["apple pie", "apple tart", "cherry"]);

        // apple appears in 2 of 3 documents
        let apple = index.term_id("apple").unwrap();
        assert_close(index.idf(apple).unwrap(), (4.0f32 / 3.0).ln() + 1.0);

        let cherry = index.term_id("cherry").unwrap();
        assert_close(index.idf(cherry).unwrap(), 2.0f32.ln() + 1.0);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let index = LexicalIndex::from_documents(&[
            "heist crew robbery heist",
            "quiet village romance",
            "robbery romance",
        ]);

        for vector in index.vectors() {
            let norm: f32 = vector.entries().iter().map(|&(_, w)| w * w).sum();
            assert_close(norm, 1.0);
        }
    }

    #[test]
    fn test_term_frequency_raises_weight() {
        let index = LexicalIndex::from_documents(&["heist heist crew", "crew heist"]);

        let v = index.vector(0).unwrap();
        let heist = index.term_id("heist").unwrap();
        let crew = index.term_id("crew").unwrap();
        // Same idf, so the repeated term dominates
        assert!(v.weight(heist) > v.weight(crew));
    }

    #[test]
    fn test_empty_document_gives_zero_vector() {
        let index = LexicalIndex::from_documents(&["space opera", " "]);

        assert!(index.vector(1).unwrap().is_zero());
        assert_eq!(index.vector(1).unwrap().dot(index.vector(0).unwrap()), 0.0);
    }

    #[test]
    fn test_empty_corpus() {
        let index = LexicalIndex::from_documents(&[]);

        assert!(index.is_empty());
        assert!(index.vocabulary().is_empty());
    }

    #[test]
    fn test_build_is_deterministic() {
        let docs = ["war drama soldiers", "comedy wedding", "drama wedding soldiers"];
        let a = LexicalIndex::from_documents(&docs);
        let b = LexicalIndex::from_documents(&docs);

        assert_eq!(a.vocabulary(), b.vocabulary());
        assert_eq!(a.vectors(), b.vectors());
    }
}
