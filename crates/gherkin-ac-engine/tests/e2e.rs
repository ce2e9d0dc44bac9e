//! End-to-end tests for the auto-complete engine.
//!
//! These write real feature files to disk, build an engine over them,
//! and drive the per-keystroke surface the way an editor host would.

use gherkin_ac_engine::{Engine, EngineConfig, EngineError};
use gherkin_ac_types::Completion;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_feature(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn engine_over(dirs: &[&Path]) -> Engine {
    Engine::new(EngineConfig {
        directories: dirs.iter().map(|d| d.to_path_buf()).collect(),
    })
    .unwrap()
}

fn labels(completions: &[Completion]) -> Vec<&str> {
    completions.iter().map(|c| c.label.as_str()).collect()
}

#[test]
fn typing_after_keyword_offers_matching_snippet() {
    let tmp = TempDir::new().unwrap();
    write_feature(
        tmp.path(),
        "apples.feature",
        "Feature: Apples\n\
         Scenario: counting\n\
         Given I have \"5\" apples\n\
         Given a basket\n\
         When I eat 2 apples\n",
    );
    let engine = engine_over(&[tmp.path()]);

    // Only the keyword committed: everything under `given` is offered.
    let completions = engine.on_edit("Given ", &[]);
    assert_eq!(
        labels(&completions),
        ["I have \"input\" apples\tgiven", "a basket\tgiven"]
    );

    // Typing narrows to the char-matching step and strips the
    // committed words from the snippet.
    let completions = engine.on_edit("Given I have \"", &[]);
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].insert_text, "\"${1:input}\" apples");
}

#[test]
fn continuation_line_completes_under_prior_primary_keyword() {
    let tmp = TempDir::new().unwrap();
    write_feature(
        tmp.path(),
        "apples.feature",
        "When I eat 2 apples\nThen I feel full\n",
    );
    let engine = engine_over(&[tmp.path()]);

    let preceding = vec![
        "Scenario: snack".to_string(),
        "When I eat 2 apples".to_string(),
    ];
    let completions = engine.on_edit("And I ", &preceding);
    assert_eq!(
        labels(&completions),
        ["I eat [number] apples\twhen"]
    );
    assert_eq!(completions[0].insert_text, "I eat ${1:[number]} apples");
}

#[test]
fn steps_merge_across_directories_and_files() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    write_feature(a.path(), "x.feature", "Given I wait 5 seconds\n");
    write_feature(b.path(), "y.feature", "Given I wait 30 seconds\n");
    let engine = engine_over(&[a.path(), b.path()]);

    // Both raw steps canonicalize to the same record.
    assert_eq!(engine.catalog().len(), 1);
    let completions = engine.on_edit("Given ", &[]);
    assert_eq!(labels(&completions), ["I wait [number] seconds\tgiven"]);
}

#[test]
fn save_rebuilds_catalog_wholesale() {
    let tmp = TempDir::new().unwrap();
    write_feature(tmp.path(), "x.feature", "Given a basket\n");
    let mut engine = engine_over(&[tmp.path()]);
    assert_eq!(engine.catalog().len(), 1);

    // Replace the file contents entirely; the old step must not linger.
    write_feature(tmp.path(), "x.feature", "Then the basket is empty\n");
    engine.on_file_saved(&tmp.path().join("x.feature"));

    assert_eq!(engine.catalog().len(), 1);
    assert!(engine.on_edit("Given ", &[]).is_empty());
    assert_eq!(engine.on_edit("Then ", &[]).len(), 1);
}

#[test]
fn empty_directory_configuration_is_reported() {
    let err = Engine::new(EngineConfig::default())
        .err()
        .expect("expected a configuration error");
    assert!(matches!(err, EngineError::NoDirectories));
}
