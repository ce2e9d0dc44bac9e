//! Line-oriented step extraction.
//!
//! Only step-shaped lines matter: a leading `given`/`when`/`then` (or a
//! continuation `and`/`but`) followed by at least one more token. Feature
//! and scenario headers, tags, tables, comments, and blank lines all fall
//! through the keyword check and are ignored.

use gherkin_ac_types::{StepKeyword, StepRecord};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::ParseError;

/// Extract the raw step records from every file, in one set.
///
/// Each file is opened, consumed line by line, and closed when its
/// reader drops, on every exit path. A read failure propagates and
/// aborts the whole extraction.
pub fn extract_steps(files: &[PathBuf]) -> Result<HashSet<StepRecord>, ParseError> {
    let mut steps = HashSet::new();

    for path in files {
        let io_err = |source| ParseError::Io {
            path: path.clone(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(io_err)?);
        let before = steps.len();
        extract_steps_from_reader(reader, &mut steps).map_err(io_err)?;
        tracing::debug!(
            "extracted {} new step(s) from {}",
            steps.len() - before,
            path.display()
        );
    }

    Ok(steps)
}

/// Extract step records from one source, accumulating into `steps`.
///
/// The last-seen primary keyword is tracked per source: it starts unset
/// here, so state never leaks across files. A continuation word emits
/// under the existing primary keyword; a continuation word seen before
/// any primary keyword has no context to inherit and its line is
/// skipped.
pub fn extract_steps_from_reader<R: BufRead>(
    reader: R,
    steps: &mut HashSet<StepRecord>,
) -> io::Result<()> {
    let mut last_keyword: Option<StepKeyword> = None;

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.trim_start().splitn(2, char::is_whitespace);
        let first = parts.next().unwrap_or("");
        let body = parts.next().map(str::trim).unwrap_or("");

        // No body after the keyword: not a step.
        if first.is_empty() || body.is_empty() {
            continue;
        }

        let keyword = if let Some(kw) = StepKeyword::parse(first) {
            last_keyword = Some(kw);
            kw
        } else if StepKeyword::is_continuation(first) {
            match last_keyword {
                Some(kw) => kw,
                None => continue,
            }
        } else {
            continue;
        };

        steps.insert(StepRecord::new(keyword, body));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn extract_str(content: &str) -> HashSet<StepRecord> {
        let mut steps = HashSet::new();
        extract_steps_from_reader(content.as_bytes(), &mut steps).unwrap();
        steps
    }

    #[test]
    fn test_keyword_and_body() {
        let steps = extract_str("Given I have \"5\" apples\n");
        assert_eq!(steps.len(), 1);
        assert!(steps.contains(&StepRecord::new(
            StepKeyword::Given,
            "I have \"5\" apples"
        )));
    }

    #[test]
    fn test_continuation_inherits_primary() {
        let steps = extract_str("When I add 2 apples\nAnd the total is 10\n");
        assert!(steps.contains(&StepRecord::new(StepKeyword::When, "the total is 10")));
    }

    #[test]
    fn test_continuation_before_primary_is_skipped() {
        let steps = extract_str("And the total is 10\nGiven a basket\n");
        assert_eq!(steps.len(), 1);
        assert!(steps.contains(&StepRecord::new(StepKeyword::Given, "a basket")));
    }

    #[test]
    fn test_non_step_lines_ignored() {
        let steps = extract_str(
            "Feature: Apples\n\
             \n\
             Scenario: counting\n\
             # a comment\n\
             | fuji | 3 |\n\
             Given a basket\n",
        );
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_bare_keyword_skipped() {
        let steps = extract_str("Given\nWhen   \nThen done\n");
        assert_eq!(steps.len(), 1);
        assert!(steps.contains(&StepRecord::new(StepKeyword::Then, "done")));
    }

    #[test]
    fn test_leading_whitespace_and_case() {
        let steps = extract_str("    GIVEN a basket\n\tthen it is empty\n");
        assert!(steps.contains(&StepRecord::new(StepKeyword::Given, "a basket")));
        assert!(steps.contains(&StepRecord::new(StepKeyword::Then, "it is empty")));
    }

    #[test]
    fn test_state_does_not_leak_across_files() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.feature");
        let b = tmp.path().join("b.feature");
        fs::write(&a, "When I log in\n").unwrap();
        // File b opens with a continuation word; it must not inherit
        // file a's `when`.
        fs::write(&b, "And I am redirected\n").unwrap();

        let steps = extract_steps(&[a, b]).unwrap();
        assert_eq!(steps.len(), 1);
        assert!(steps.contains(&StepRecord::new(StepKeyword::When, "I log in")));
    }

    #[test]
    fn test_missing_file_propagates() {
        let result = extract_steps(&[PathBuf::from("/nonexistent/x.feature")]);
        assert!(matches!(result, Err(ParseError::Io { .. })));
    }

    #[test]
    fn test_duplicate_steps_collapse() {
        let steps = extract_str("Given a basket\nGiven a basket\n");
        assert_eq!(steps.len(), 1);
    }
}
