//! # Lexical Crate
//!
//! Content representation of the catalog:
//!
//! - **tokenizer**: lowercase word tokens with English stop-words removed
//! - **tfidf**: `LexicalIndex`, one L2-normalized TF-IDF vector per item
//! - **similarity**: `SimilarityMatrix`, full pairwise cosine similarity
//!
//! ## Example Usage
//!
//! ```ignore
//! use lexical::{LexicalIndex, SimilarityMatrix};
//!
//! let index = LexicalIndex::build(catalog.items());
//! let matrix = SimilarityMatrix::compute(&index);
//!
//! let score = matrix.get(0, 1);
//! ```
//!
//! Both structures are built once and read-only afterwards. Construction
//! uses Rayon internally but the calls themselves are synchronous.

pub mod tokenizer;
pub mod tfidf;
pub mod similarity;

pub use similarity::SimilarityMatrix;
pub use tfidf::{LexicalIndex, LexicalVector, TermId};
pub use tokenizer::tokenize;
