//! Catalog construction and derived lookups.
//!
//! - Load the catalog from a CSV path or any reader
//! - List the distinct genre labels for display

use crate::error::{DataSourceError, Result};
use crate::parser;
use crate::types::*;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Load the catalog from a CSV file
    ///
    /// This is the main entry point for loading data. A missing file is
    /// reported as `FileNotFound`; callers treat every error as fatal.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataSourceError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataSourceError::IoError(e),
        })?;

        let catalog = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} catalog items", catalog.len());
        Ok(catalog)
    }

    /// Parse a catalog from CSV data held anywhere (file, memory, stdin)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let items = parser::parse_catalog(reader)?;
        debug!(
            "Parsed {} rows, {} without overview",
            items.len(),
            items.iter().filter(|item| item.overview.is_none()).count()
        );
        Ok(Self::new(items))
    }

    /// Distinct genre labels across the catalog, sorted lexicographically
    ///
    /// Each raw genre field is split on commas and trimmed; items without a
    /// genre contribute nothing.
    pub fn list_genres(&self) -> Vec<String> {
        let genres: BTreeSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.genre_labels())
            .collect();

        genres.into_iter().map(str::to_string).collect()
    }
}
