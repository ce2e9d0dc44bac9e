//! Completion candidate assembly.

use gherkin_ac_catalog::Catalog;
use gherkin_ac_types::{Completion, StepKeyword};
use std::collections::BTreeMap;

use crate::format::format_step;
use crate::matcher::step_matches_line;

/// Assemble the completion candidates for one keystroke.
///
/// Every catalog step under `keyword` is considered. With only the
/// keyword typed (`line_words.len() == 1`) every step is offered,
/// unfiltered. With more typed, a step is offered only if it survives
/// the character-level prefix match, formatted against the typed words.
///
/// Candidates are keyed by the step's raw canonical body, so repeated
/// calls overwrite rather than duplicate, and the map's key order is
/// the ascending label order the host expects. The map is single-use:
/// built, drained into the host's list, dropped.
pub fn build_completions(
    catalog: &Catalog,
    keyword: StepKeyword,
    line_words: &[&str],
) -> BTreeMap<String, Completion> {
    let mut completions = BTreeMap::new();

    for step in catalog.steps_for_keyword(keyword) {
        let insert_text = if line_words.len() == 1 {
            format_step(&step.body, &[])
        } else {
            let step_words: Vec<&str> = step.body.split_whitespace().collect();
            if !step_matches_line(&step_words, line_words) {
                continue;
            }
            format_step(&step.body, line_words)
        };

        completions.insert(
            step.body.clone(),
            Completion {
                label: format!("{}\t{}", step.body, keyword),
                insert_text,
            },
        );
    }

    tracing::debug!(
        "assembled {} completion candidate(s) for `{}`",
        completions.len(),
        keyword
    );
    completions
}
