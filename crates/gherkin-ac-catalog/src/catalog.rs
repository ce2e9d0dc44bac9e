//! The canonical step catalog.
//!
//! A catalog is built wholesale from a set of directories: discover
//! feature files, extract raw steps, normalize, dedup. There is no
//! incremental update; a rebuild produces a whole new catalog and the
//! owner swaps it in only when the rebuild fully succeeded.

use gherkin_ac_parser::discovery::discover_feature_files;
use gherkin_ac_parser::extract::extract_steps;
use gherkin_ac_parser::ParseError;
use gherkin_ac_types::{StepKeyword, StepRecord};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

use crate::normalize::normalize_steps;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The set of canonicalized step records known to one session.
///
/// Owned by exactly one engine/host context and passed by reference to
/// the matching and formatting calls; there is no process-wide shared
/// instance.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    steps: HashSet<StepRecord>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Build a catalog from already-canonical records (hosts and tests).
    pub fn from_steps(steps: impl IntoIterator<Item = StepRecord>) -> Catalog {
        Catalog {
            steps: steps.into_iter().collect(),
        }
    }

    /// Build the catalog for a directory set: discover, extract,
    /// normalize. Any discovery or read failure propagates and leaves
    /// the caller's previous catalog untouched.
    pub fn build(directories: &[PathBuf]) -> Result<Catalog, CatalogError> {
        let files = discover_feature_files(directories)?;
        let raw = extract_steps(&files)?;
        let steps = normalize_steps(raw);
        tracing::info!(
            "catalog built: {} step(s) from {} file(s)",
            steps.len(),
            files.len()
        );
        Ok(Catalog { steps })
    }

    /// All canonical steps, in no particular order.
    pub fn steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter()
    }

    /// The canonical steps filed under one primary keyword.
    pub fn steps_for_keyword(&self, keyword: StepKeyword) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(move |s| s.keyword == keyword)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
