//! Feature-file discovery and step extraction for gherkin-ac.
//!
//! Discovery lists `*.feature` files directly inside configured
//! directories (non-recursive); extraction reads each file line by line
//! and collects `(keyword, body)` step records.

pub mod discovery;
pub mod extract;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering or reading feature files.
///
/// Any of these aborts the catalog rebuild that triggered it; the engine
/// keeps the previous catalog rather than swapping in a partial one.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid feature-file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to list feature files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
