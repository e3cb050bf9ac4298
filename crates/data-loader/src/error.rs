//! Error types for the data-loader crate.
//!
//! Every variant here is fatal to catalog loading: a catalog is either
//! fully parsed or not returned at all.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
///
/// `#[derive(Error)]` from thiserror gives us `std::error::Error` and a
/// `Display` built from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// Catalog file could not be found
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The header row lacks a column the loader depends on
    #[error("Catalog is missing required column `{column}`")]
    MissingColumn { column: String },

    /// A row couldn't be parsed (wrong field count, bad encoding, ...)
    #[error("Malformed catalog data: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataSourceError>;
