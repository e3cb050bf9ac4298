//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets, and the
//! Candidate type those filters operate on.

use data_loader::{Catalog, CatalogItem, Position};

/// A catalog item still under consideration for a query.
///
/// Borrowed from the catalog, so building and filtering candidates never
/// clones item data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub position: Position,
    pub item: &'a CatalogItem,
}

impl<'a> Candidate<'a> {
    pub fn new(position: Position, item: &'a CatalogItem) -> Self {
        Self { position, item }
    }

    /// Every catalog item as a candidate, in catalog order
    pub fn all(catalog: &'a Catalog) -> Vec<Candidate<'a>> {
        catalog
            .items()
            .iter()
            .enumerate()
            .map(|(position, item)| Candidate::new(position, item))
            .collect()
    }
}

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filtering never fails: a criterion that can't be evaluated for an item
///   excludes that item
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates, preserving their order
    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>>;
}
