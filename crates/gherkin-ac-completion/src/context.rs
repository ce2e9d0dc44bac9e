//! Keyword context detection.
//!
//! Decides which primary keyword governs the line being typed, looking
//! at the current line first and then scanning backward through the
//! preceding lines.

use gherkin_ac_types::StepKeyword;

/// The text surrounding the cursor, rebuilt by the host per keystroke.
#[derive(Debug, Clone)]
pub struct LineContext<'a> {
    /// The line being typed, trimmed by the host.
    pub current_line: &'a str,
    /// Every line above the current one, in document order.
    pub preceding_lines: &'a [String],
}

/// Find the primary keyword governing the current line.
///
/// If the current line's first word is `given`/`when`/`then`
/// (case-insensitive), that wins. Otherwise preceding lines are
/// scanned in reverse; the first line whose first token is a primary
/// keyword terminates the scan. Continuation words and everything else
/// are skipped. `None` means no keyword context exists before the
/// start of the document; the caller logs and offers no completions.
pub fn find_last_keyword(ctx: &LineContext<'_>) -> Option<StepKeyword> {
    if let Some(first) = ctx.current_line.split_whitespace().next() {
        if let Some(keyword) = StepKeyword::parse(first) {
            return Some(keyword);
        }
    }

    for line in ctx.preceding_lines.iter().rev() {
        if let Some(first) = line.split_whitespace().next() {
            if let Some(keyword) = StepKeyword::parse(first) {
                return Some(keyword);
            }
        }
    }

    None
}
