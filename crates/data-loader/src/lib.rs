//! # Data Loader Crate
//!
//! This crate loads the IMDb top-movies CSV into an in-memory catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CatalogItem, Catalog, Position)
//! - **parser**: Parse CSV rows into catalog items
//! - **index**: Catalog loading entry points and the genre listing
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load(Path::new("imdb_top_1000.csv"))?;
//!
//! println!("{} movies", catalog.len());
//! println!("Genres: {}", catalog.list_genres().join(", "));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataSourceError, Result};
pub use types::{Catalog, CatalogItem, Position};
