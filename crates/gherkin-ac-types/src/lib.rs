//! Shared types for gherkin-ac.
//!
//! Contains the step keyword, step record, and completion item types
//! used across parser, catalog, completion, and engine crates.

use serde::{Deserialize, Serialize};

/// Primary Gherkin step keywords. `and`/`but` are continuation words;
/// they inherit the most recent primary keyword and are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKeyword {
    Given,
    When,
    Then,
}

impl StepKeyword {
    /// Parse a word as a primary keyword, case-insensitively.
    pub fn parse(word: &str) -> Option<StepKeyword> {
        match word.to_lowercase().as_str() {
            "given" => Some(StepKeyword::Given),
            "when" => Some(StepKeyword::When),
            "then" => Some(StepKeyword::Then),
            _ => None,
        }
    }

    /// Whether a word is a continuation keyword (`and`/`but`), case-insensitively.
    pub fn is_continuation(word: &str) -> bool {
        matches!(word.to_lowercase().as_str(), "and" | "but")
    }

    /// The lower-case keyword text.
    pub fn as_str(self) -> &'static str {
        match self {
            StepKeyword::Given => "given",
            StepKeyword::When => "when",
            StepKeyword::Then => "then",
        }
    }
}

impl std::fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step extracted from a feature file: the governing primary keyword
/// and the step body (the line after the leading keyword, trimmed).
///
/// Equality is over both fields; the body is case-sensitive. Bodies may
/// be raw (straight from the extractor) or canonicalized (after
/// normalization) depending on which stage produced the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepRecord {
    pub keyword: StepKeyword,
    pub body: String,
}

impl StepRecord {
    pub fn new(keyword: StepKeyword, body: impl Into<String>) -> Self {
        StepRecord {
            keyword,
            body: body.into(),
        }
    }
}

/// A single completion offered to the host: a display label and the
/// snippet text to insert (with `${n:...}` fill-in placeholders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub label: String,
    pub insert_text: String,
}
