//! Parser for the IMDb top-movies CSV file.
//!
//! The file has a header row and (at least) these columns:
//! - `Series_Title`: movie title
//! - `Genre`: comma-separated genres inside one quoted cell, e.g. "Crime, Drama"
//! - `Overview`: one-paragraph synopsis
//! - `IMDB_Rating`: decimal rating, e.g. 9.3
//!
//! Any other columns (poster link, director, stars, ...) are ignored.

use crate::error::{DataSourceError, Result};
use crate::types::CatalogItem;
use serde::Deserialize;
use std::io::Read;

/// Columns the loader cannot work without
const REQUIRED_COLUMNS: [&str; 4] = ["Series_Title", "Genre", "Overview", "IMDB_Rating"];

/// Raw shape of one CSV row before `combined_text` is derived.
///
/// Empty cells deserialize to `None`. A rating cell that is not a number
/// ("N/A", "-", ...) also becomes `None` instead of failing the load.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Series_Title")]
    title: String,

    #[serde(rename = "Genre")]
    genre: Option<String>,

    #[serde(rename = "Overview")]
    overview: Option<String>,

    #[serde(rename = "IMDB_Rating", deserialize_with = "csv::invalid_option")]
    rating: Option<f32>,
}

impl From<CatalogRow> for CatalogItem {
    fn from(row: CatalogRow) -> Self {
        CatalogItem::new(row.title, row.genre, row.overview, row.rating)
    }
}

/// Parse catalog rows from any reader.
///
/// The header row is validated before any data row is read, so a file with
/// the wrong schema fails fast with `MissingColumn`.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<CatalogItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_columns(&headers)?;

    let mut items = Vec::new();
    for row in rdr.deserialize::<CatalogRow>() {
        items.push(CatalogItem::from(row?));
    }

    Ok(items)
}

/// Verify every required column is present in the header row
fn check_columns(headers: &csv::StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataSourceError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
