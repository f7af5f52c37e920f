//! Integration tests for loading and checking story files

use std::fs;

use branchplay::story::{StoryError, StoryWarning};
use branchplay::Story;

use crate::helpers::{fixture, load_fixture, temp_fixture};

#[test]
fn toml_and_json_load_the_same_table() {
    let from_toml = Story::load(&fixture("cave.toml")).expect("Should load TOML");
    let from_json = Story::load(&fixture("cave.json")).expect("Should load JSON");

    assert_eq!(from_toml, from_json);
    assert_eq!(from_toml.len(), 2);
    assert_eq!(from_toml.display_title(), "The Cave");
    assert_eq!(from_toml.duration, Some(120.0));
    assert_eq!(from_toml.triggers[0].links[1].label, "GO AROUND");
    assert_eq!(from_toml.triggers[0].links[1].target, 66.0);
}

#[test]
fn table_order_is_preserved() {
    let story = Story::load(&fixture("twins.toml")).expect("Should load twins.toml");
    let times: Vec<f64> = story.triggers.iter().map(|t| t.time).collect();

    assert_eq!(times, vec![352.0, 327.0], "Table must not be sorted");
}

#[test]
fn entry_without_time_loads_inert() {
    let story = Story::from_toml(&load_fixture("lint.toml")).expect("Should load lint.toml");

    assert_eq!(story.len(), 4);
    assert!(story.triggers[0].is_inert());
    assert!(!story.triggers[1].is_inert());
}

#[test]
fn extension_is_case_insensitive() {
    let (temp_dir, path) = temp_fixture("cave.toml");
    let upper = temp_dir.path().join("CAVE.TOML");
    fs::rename(&path, &upper).expect("Should rename fixture");

    let story = Story::load(&upper).expect("Should load upper-case extension");
    assert_eq!(story.len(), 2);
}

#[test]
fn malformed_file_fails_to_load() {
    let result = Story::load(&fixture("broken.toml"));
    assert!(matches!(result, Err(StoryError::Toml(_))));
}

#[test]
fn unknown_extension_is_rejected() {
    let (temp_dir, path) = temp_fixture("cave.toml");
    let yaml = temp_dir.path().join("cave.yaml");
    fs::rename(&path, &yaml).expect("Should rename fixture");

    let result = Story::load(&yaml);
    assert!(matches!(
        result,
        Err(StoryError::UnsupportedFormat { ref extension }) if extension == "yaml"
    ));
}

#[test]
fn missing_file_is_reported() {
    let result = Story::load(&fixture("does-not-exist.toml"));
    assert!(matches!(result, Err(StoryError::FileNotFound { .. })));
}

#[test]
fn check_reports_every_problem_in_order() {
    let story = Story::load(&fixture("lint.toml")).expect("Should load lint.toml");
    let warnings = story.check(0.5);

    assert_eq!(warnings.len(), 4);
    assert_eq!(warnings[0], StoryWarning::InertTrigger { index: 0 });
    assert_eq!(
        warnings[1],
        StoryWarning::NoChoices {
            index: 1,
            time: 40.0
        }
    );
    assert!(matches!(
        warnings[2],
        StoryWarning::TargetOutOfRange { index: 2, .. }
    ));
    insta::assert_snapshot!(
        warnings[3].to_string(),
        @"triggers #3 and #4 are only 0.75s apart; their disarm bands overlap"
    );
}

#[test]
fn check_leaves_clean_story_alone() {
    let story = Story::load(&fixture("cave.toml")).expect("Should load cave.toml");
    assert!(story.check(0.5).is_empty());
    assert!(Story::builtin().check(0.5).is_empty());
}
