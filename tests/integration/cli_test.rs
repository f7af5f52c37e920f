//! Integration tests for the branchplay CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{branchplay, fixture, run_branchplay};

fn cave() -> String {
    fixture("cave.toml").display().to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_branchplay(&["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["play", "simulate", "story", "config", "completions"] {
        assert!(stdout.contains(name), "Help should mention {}", name);
    }
}

#[test]
fn long_version_includes_build_date() {
    let (stdout, _stderr, exit_code) = run_branchplay(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("branchplay 0.1.0"));
    assert!(stdout.contains("(built "));
}

#[test]
fn simulate_help_documents_step_syntax() {
    let (stdout, _stderr, exit_code) = run_branchplay(&["simulate", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("choose=<n>"));
    assert!(stdout.contains("jump=<seconds>"));
}

// ============================================================================
// Simulate Tests
// ============================================================================

#[test]
fn simulate_prints_one_report_per_step() {
    let (stdout, _stderr, exit_code) = run_branchplay(&[
        "simulate", "--story", &cave(), "play", "24.6", "choose=1", "35.1",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("> ")).count(), 4);
    assert!(stdout.contains("> t=24.6\n  fired trigger at 25s\n"));
    assert!(stdout.contains("  choices [GO THROUGH -> 35, GO AROUND -> 66]\n"));
    assert!(stdout.contains("[paused-at-trigger pos=24.6s guard=25s overlay=shown]"));
    assert!(stdout.contains("> t=35.1\n  [playing pos=35.1s guard=armed overlay=hidden]"));
    assert_eq!(stdout.matches("fired trigger").count(), 1);
}

#[test]
fn simulate_json_output_is_machine_readable() {
    let (stdout, _stderr, exit_code) = run_branchplay(&[
        "simulate", "--story", &cave(), "--format", "json", "play", "24.6", "dump",
    ]);

    assert_eq!(exit_code, 0);
    let reports: serde_json::Value = serde_json::from_str(&stdout).expect("Should be JSON");
    let reports = reports.as_array().expect("Should be an array");

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[1]["fired"], 25.0);
    assert_eq!(reports[1]["phase"], "paused-at-trigger");
    assert_eq!(reports[1]["overlay_visible"], true);
    assert!(reports[0].get("output").is_none());
    assert!(reports[2]["output"]
        .as_str()
        .expect("dump has output")
        .contains("GO THROUGH -> 35s | GO AROUND -> 66s"));
}

#[test]
fn simulate_failed_seek_logs_warning() {
    let (stdout, stderr, exit_code) = run_branchplay(&[
        "simulate", "--story", &cave(), "play", "24.6", "fail", "choose=1",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[paused-at-trigger pos=24.6s guard=35s overlay=shown]"));
    assert!(stderr.contains("error navigating to timestamp"));
}

#[test]
fn simulate_rejects_unknown_step() {
    let (_stdout, stderr, exit_code) =
        run_branchplay(&["simulate", "--story", &cave(), "rewind"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unknown step 'rewind'"));
}

#[test]
fn simulate_rejects_infinite_advance() {
    let (_stdout, stderr, exit_code) =
        run_branchplay(&["simulate", "--story", &cave(), "play", "advance=inf"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("step 'advance' needs a number, got 'inf'"));
}

#[test]
fn simulate_huge_advance_stops_at_end_of_video() {
    let (stdout, _stderr, exit_code) = run_branchplay(&[
        "simulate", "--story", &cave(), "play", "jump=110", "advance=1e12",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[idle pos=120s guard=armed overlay=hidden]"));
}

#[test]
fn simulate_without_story_uses_bundled_sample() {
    let home = TempDir::new().unwrap();
    Command::from_std(branchplay(&home))
        .args(["simulate", "dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. 0:25 (25s) GO THROUGH -> 35s"))
        .stdout(predicate::str::contains(" 11. 5:27 (327s)"));
}

#[test]
fn simulate_reports_unreadable_story() {
    let home = TempDir::new().unwrap();
    Command::from_std(branchplay(&home))
        .args(["simulate", "--story"])
        .arg(fixture("broken.toml"))
        .arg("play")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load story"));
}

// ============================================================================
// Story Tests
// ============================================================================

#[test]
fn story_show_prints_table_in_file_order() {
    let home = TempDir::new().unwrap();
    let assert = Command::from_std(branchplay(&home))
        .args(["story", "show"])
        .arg(fixture("twins.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Twin Triggers"))
        .stdout(predicate::str::contains("2 triggers, tolerance 0.5s, duration 400s"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let first = stdout.find("(352s)").expect("352 listed");
    let second = stdout.find("(327s)").expect("327 listed");
    assert!(first < second);
}

#[test]
fn story_show_json_reloads_with_inert_entries() {
    let lint = fixture("lint.toml").display().to_string();
    let (stdout, _stderr, exit_code) =
        run_branchplay(&["story", "show", "--format", "json", &lint]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("\"time\": null"));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lint.json");
    std::fs::write(&path, &stdout).unwrap();

    let story = branchplay::Story::load(&path).expect("Should reload its own JSON");
    assert_eq!(story.len(), 4);
    assert!(story.triggers[0].is_inert());
    assert_eq!(story.check(0.5).len(), 4);
}

#[test]
fn story_check_passes_clean_story() {
    let home = TempDir::new().unwrap();
    Command::from_std(branchplay(&home))
        .args(["story", "check"])
        .arg(fixture("cave.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("The Cave: 2 triggers, no problems found"));
}

#[test]
fn story_check_fails_with_warnings() {
    let home = TempDir::new().unwrap();
    Command::from_std(branchplay(&home))
        .args(["story", "check"])
        .arg(fixture("lint.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "warning: trigger #1 has no time and will never fire",
        ))
        .stdout(predicate::str::contains("warning: trigger #2 at 40s has no choices"))
        .stderr(predicate::str::contains("4 problem(s) found"));
}

#[test]
fn story_check_tolerance_flag_changes_band() {
    let home = TempDir::new().unwrap();
    // With a 0.25s tolerance the 0.75s gap no longer overlaps
    Command::from_std(branchplay(&home))
        .args(["story", "check", "--tolerance", "0.25"])
        .arg(fixture("lint.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("disarm bands overlap").not())
        .stderr(predicate::str::contains("3 problem(s) found"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let (stdout, _stderr, exit_code) = run_branchplay(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[player]"));
    assert!(stdout.contains("tolerance = 0.5"));
    assert!(stdout.contains("tick_interval_ms = 250"));
}

#[test]
fn config_path_points_into_config_dir() {
    let home = TempDir::new().unwrap();
    Command::from_std(branchplay(&home))
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("branchplay"))
        .stdout(predicate::str::ends_with("config.toml\n"));
}

#[test]
fn configured_default_story_is_used() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("branchplay");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[story]\npath = {:?}\n", cave()),
    )
    .unwrap();

    Command::from_std(branchplay(&home))
        .args(["story", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Cave"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let (stdout, _stderr, exit_code) = run_branchplay(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("branchplay"));
}
