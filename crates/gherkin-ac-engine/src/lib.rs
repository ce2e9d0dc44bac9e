//! Host-facing auto-complete engine.
//!
//! The host (an editor integration, or the bundled CLI) configures a
//! set of feature directories, then drives two entry points: `on_edit`
//! per keystroke and `on_file_saved` per save. Everything is
//! synchronous and single-owner; the host must not share one `Engine`
//! across threads or overlap rebuilds.

use gherkin_ac_catalog::{Catalog, CatalogError};
use gherkin_ac_completion::{build_completions, find_last_keyword, LineContext};
use gherkin_ac_types::Completion;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension a saved file must carry to trigger a catalog rebuild.
const FEATURE_EXTENSION: &str = "feature";

/// User-facing message for an empty directory configuration. The host
/// should surface this verbatim rather than showing an empty
/// completion list.
pub const NO_DIRECTORIES_MESSAGE: &str = "No feature directories are configured. \
     Open a project containing .feature files or add directories to the \
     auto-complete settings.";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{NO_DIRECTORIES_MESSAGE}")]
    NoDirectories,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Directories the engine scans on every rebuild: the host's open
/// project roots merged with any additionally configured directories.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub directories: Vec<PathBuf>,
}

/// One auto-complete session: a configuration and the current catalog.
pub struct Engine {
    config: EngineConfig,
    catalog: Catalog,
}

impl Engine {
    /// Build an engine and its initial catalog.
    ///
    /// An empty directory list is a configuration error, reported to
    /// the host instead of silently producing an empty catalog. A
    /// failed initial build also fails construction; there is no
    /// previous catalog to fall back on.
    pub fn new(config: EngineConfig) -> Result<Engine, EngineError> {
        if config.directories.is_empty() {
            return Err(EngineError::NoDirectories);
        }
        let catalog = Catalog::build(&config.directories)?;
        Ok(Engine { config, catalog })
    }

    /// The current catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rebuild the catalog from the configured directories. The swap is
    /// all-or-nothing: on failure the previous catalog stays in place.
    pub fn rebuild(&mut self) -> Result<(), EngineError> {
        self.catalog = Catalog::build(&self.config.directories)?;
        Ok(())
    }

    /// Save notification from the host. Only `.feature` files trigger a
    /// rebuild; a failed rebuild is logged and the previous catalog is
    /// retained.
    pub fn on_file_saved(&mut self, path: &Path) {
        if path.extension().and_then(|e| e.to_str()) != Some(FEATURE_EXTENSION) {
            return;
        }
        if let Err(err) = self.rebuild() {
            tracing::warn!("catalog rebuild failed, keeping previous catalog: {err}");
        }
    }

    /// Completions for the line being typed, sorted ascending by label.
    ///
    /// Nothing is offered until the first word of the line has been
    /// committed with a space. With no governing keyword above the
    /// cursor there is nothing to offer either; that condition is
    /// non-fatal and logged as a warning.
    pub fn on_edit(&self, current_line: &str, preceding_lines: &[String]) -> Vec<Completion> {
        if !current_line.contains(' ') {
            return Vec::new();
        }

        let current_line = current_line.trim();
        let ctx = LineContext {
            current_line,
            preceding_lines,
        };
        let Some(keyword) = find_last_keyword(&ctx) else {
            tracing::warn!("could not find given/when/then above the current line");
            return Vec::new();
        };

        let line_words: Vec<&str> = current_line.split_whitespace().collect();
        build_completions(&self.catalog, keyword, &line_words)
            .into_values()
            .collect()
    }
}
