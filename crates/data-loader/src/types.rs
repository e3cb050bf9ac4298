//! Core domain types for the movie catalog.
//!
//! A catalog is a flat, ordered list of items. An item's position in that
//! list is its identity everywhere else in the workspace (lexical vectors,
//! similarity rows, filter candidates), because titles are not unique.

use serde::Serialize;

// =============================================================================
// Type Aliases
// =============================================================================

/// Index of an item in the catalog, in file row order
pub type Position = usize;

// =============================================================================
// Catalog Item
// =============================================================================

/// One movie row from the catalog file.
///
/// Absent cells are `None`. `combined_text` is derived once when the item is
/// built and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub title: String,
    /// Raw comma-separated genre field, e.g. "Crime, Drama"
    pub genre: Option<String>,
    /// Free-text synopsis
    pub overview: Option<String>,
    /// IMDb rating on a 0-10 scale
    pub rating: Option<f32>,
    combined_text: String,
}

impl CatalogItem {
    /// Build an item, deriving `combined_text` as `genre + " " + overview`
    /// with absent parts treated as empty strings.
    pub fn new(
        title: impl Into<String>,
        genre: Option<String>,
        overview: Option<String>,
        rating: Option<f32>,
    ) -> Self {
        let combined_text = format!(
            "{} {}",
            genre.as_deref().unwrap_or(""),
            overview.as_deref().unwrap_or("")
        );

        Self {
            title: title.into(),
            genre,
            overview,
            rating,
            combined_text,
        }
    }

    /// Genre text followed by the overview; always present, possibly blank
    pub fn combined_text(&self) -> &str {
        &self.combined_text
    }

    /// Individual genre labels, trimmed, with empty fragments skipped
    pub fn genre_labels(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .into_iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}

// =============================================================================
// Catalog - the in-memory table
// =============================================================================

/// All catalog items in file order.
///
/// Built once at startup and treated as read-only afterwards; share it
/// behind an `Arc` rather than cloning.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) items: Vec<CatalogItem>,
}

impl Catalog {
    /// Creates a catalog from already-built items
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Get an item by position
    pub fn get(&self, position: Position) -> Option<&CatalogItem> {
        self.items.get(position)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the first item whose title equals `title`, ignoring case
    pub fn position_of(&self, title: &str) -> Option<Position> {
        let wanted = title.trim().to_lowercase();
        self.items
            .iter()
            .position(|item| item.title.to_lowercase() == wanted)
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
