//! Non-recursive discovery of `*.feature` files.

use crate::ParseError;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Glob suffix matched inside each configured directory.
const FEATURE_GLOB: &str = "*.feature";

/// List feature files directly inside each directory (non-recursive).
///
/// Results are concatenated across directories in input order and are
/// not deduplicated; duplicate steps collapse later at the catalog
/// level. An empty input slice yields an empty list. A directory that
/// does not exist simply contributes no files.
pub fn discover_feature_files(directories: &[PathBuf]) -> Result<Vec<PathBuf>, ParseError> {
    let mut files = Vec::new();

    for dir in directories {
        let pattern = format!("{}{}", with_trailing_separator(dir), FEATURE_GLOB);
        for entry in glob::glob(&pattern)? {
            files.push(entry?);
        }
    }

    tracing::debug!("discovered {} feature file(s)", files.len());
    Ok(files)
}

/// Render a directory path with exactly one trailing separator.
fn with_trailing_separator(dir: &Path) -> String {
    let mut text = dir.to_string_lossy().into_owned();
    if !text.ends_with(MAIN_SEPARATOR) && !text.ends_with('/') {
        text.push(MAIN_SEPARATOR);
    }
    text
}
