//! Completion engine for gherkin-ac.
//!
//! The per-keystroke pieces: keyword context detection, prefix
//! matching of catalog steps against the typed line, and snippet
//! formatting with fill-in placeholders restored.

pub mod context;
pub mod format;
pub mod matcher;
pub mod provider;

pub use context::{find_last_keyword, LineContext};
pub use format::format_step;
pub use matcher::step_matches_line;
pub use provider::build_completions;
