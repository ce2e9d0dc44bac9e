//! Step normalization and the canonical step catalog for gherkin-ac.
//!
//! Normalization rewrites variable-shaped substrings (quoted literals,
//! angle-bracket placeholders, numbers) into fixed placeholder tokens so
//! that semantically-equivalent steps collapse to one catalog entry.

pub mod catalog;
pub mod normalize;

pub use catalog::{Catalog, CatalogError};
pub use normalize::{normalize_body, normalize_steps, TokenClass};
