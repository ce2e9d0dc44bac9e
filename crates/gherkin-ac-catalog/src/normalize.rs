//! Placeholder token classification and step body canonicalization.

use gherkin_ac_types::StepRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// One combined pattern for all four token classes, in precedence order:
/// double-quoted run, single-quoted run, angle-bracket run, numeric
/// literal (integer, decimal, or leading-dot decimal). Scanning with a
/// single alternation keeps matches non-overlapping: the first class to
/// match at a position wins and consumes it.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:".+?")|(?:'.+?')|(?:<.+?>)|(?:\d+(?:\.\d*)?)|(?:\.\d+)"#)
        .expect("token pattern is valid")
});

/// The classes of variable-shaped tokens recognized inside step bodies.
///
/// Each class has a canonical replacement used as the dedup/match form
/// and an indexed snippet template used when re-expanding a canonical
/// step into an editable completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    DoubleQuoted,
    SingleQuoted,
    AngleBracketed,
    Number,
}

impl TokenClass {
    /// Classify a matched token by its first character. Accepts both
    /// detection matches (`"5"`, `<name>`, `3.5`) and already-canonical
    /// placeholders (`[number]` starts with `[`).
    pub fn classify(token: &str) -> Option<TokenClass> {
        match token.chars().next()? {
            '"' => Some(TokenClass::DoubleQuoted),
            '\'' => Some(TokenClass::SingleQuoted),
            '<' => Some(TokenClass::AngleBracketed),
            '[' => Some(TokenClass::Number),
            c if c.is_ascii_digit() || c == '.' => Some(TokenClass::Number),
            _ => None,
        }
    }

    /// The canonical placeholder this class collapses to.
    ///
    /// None of these re-match the detection pattern as a different
    /// class, which is what makes normalization idempotent; `[number]`
    /// in particular contains no digits and must stay that way.
    pub fn canonical(self) -> &'static str {
        match self {
            TokenClass::DoubleQuoted => "\"input\"",
            TokenClass::SingleQuoted => "'input'",
            TokenClass::AngleBracketed => "<input>",
            TokenClass::Number => "[number]",
        }
    }

    /// The snippet form with a 1-based fill-in index.
    pub fn snippet_template(self, index: usize) -> String {
        match self {
            TokenClass::DoubleQuoted => format!("\"${{{index}:input}}\""),
            TokenClass::SingleQuoted => format!("'${{{index}:input}}'"),
            TokenClass::AngleBracketed => format!("<${{{index}:input}}>"),
            TokenClass::Number => format!("${{{index}:[number]}}"),
        }
    }
}

/// Canonicalize one step body.
///
/// Matches are collected left-to-right first, then each matched
/// substring replaces the first occurrence of its exact text, one
/// occurrence per discovered match. Repeated identical substrings are
/// therefore each consumed once, in order.
pub fn normalize_body(body: &str) -> String {
    let tokens: Vec<String> = TOKEN_PATTERN
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .collect();

    let mut out = body.to_string();
    for token in &tokens {
        if let Some(class) = TokenClass::classify(token) {
            out = out.replacen(token.as_str(), class.canonical(), 1);
        }
    }
    out
}

/// Canonicalize every step body and merge the duplicates that fall out.
pub fn normalize_steps(steps: HashSet<StepRecord>) -> HashSet<StepRecord> {
    steps
        .into_iter()
        .map(|step| StepRecord::new(step.keyword, normalize_body(&step.body)))
        .collect()
}
