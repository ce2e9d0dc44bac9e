//! Snippet formatting.
//!
//! Re-expands a canonical step into an editable snippet: strips the
//! characters the user has already committed, then rewrites each
//! placeholder token into its indexed `${n:...}` fill-in form.

use gherkin_ac_catalog::TokenClass;
use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder tokens as they appear in canonical step bodies. Unlike
/// the detection pattern in the normalizer, numbers appear here only as
/// the literal `[number]` token.
static PLACEHOLDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:".+?")|(?:'.+?')|(?:<.+?>)|(?:\[number\])"#)
        .expect("placeholder pattern is valid")
});

/// Format a canonical step as an editable snippet.
///
/// `line_words[1..len-1]` — the committed words, excluding the leading
/// keyword and the word still being typed — are removed from the step
/// one character at a time, first occurrence each (the same character
/// indexing the matcher used to accept this step). Remaining
/// placeholder tokens are then rewritten left-to-right into indexed
/// fill-in templates. The result is trimmed.
pub fn format_step(step: &str, line_words: &[&str]) -> String {
    let mut out = step.to_string();

    if line_words.len() > 2 {
        let committed = line_words[1..line_words.len() - 1].join(" ");
        for ch in committed.chars() {
            if let Some(pos) = out.find(ch) {
                out.remove(pos);
            }
        }
    }

    // Rewrite placeholders by position so an inserted template is never
    // itself rewritten (a `${n:[number]}` still contains `[number]`).
    let mut result = String::with_capacity(out.len());
    let mut last = 0;
    let mut index = 1;
    for m in PLACEHOLDER_PATTERN.find_iter(&out) {
        if let Some(class) = TokenClass::classify(m.as_str()) {
            result.push_str(&out[last..m.start()]);
            result.push_str(&class.snippet_template(index));
            index += 1;
            last = m.end();
        }
    }
    result.push_str(&out[last..]);

    result.trim().to_string()
}
