//! Character-level prefix matching of catalog steps against the typed
//! line.
//!
//! The comparison is positional over the rendered text, not
//! word-boundary-aware, and the snippet formatter depends on the same
//! character indexing when it strips already-typed text. Keep the two
//! in lockstep.

/// Does the catalog step qualify as a completion for the typed words?
///
/// `line_words[0]` is the line's leading keyword and is excluded. The
/// step qualifies only if its rendered text is at least as long as the
/// typed text and every typed character equals the step character at
/// the same index.
pub fn step_matches_line(step_words: &[&str], line_words: &[&str]) -> bool {
    let line_text = line_words.get(1..).unwrap_or(&[]).join(" ");
    let step_text = step_words.join(" ");

    if step_text.chars().count() < line_text.chars().count() {
        return false;
    }

    step_text
        .chars()
        .zip(line_text.chars())
        .all(|(step_char, line_char)| step_char == line_char)
}
