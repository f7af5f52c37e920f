//! End-to-end playback scenarios against the simulated provider

use branchplay::player::{Phase, PlaybackProvider, PlayerEvent};
use branchplay::script::{apply_step, run_script, scripted_player, Step, StepReport};
use branchplay::Story;

use crate::helpers::fixture;

fn cave() -> Story {
    Story::load(&fixture("cave.toml")).expect("Should load cave.toml")
}

fn fires(reports: &[StepReport]) -> Vec<f64> {
    reports.iter().filter_map(|r| r.fired).collect()
}

// ============================================================================
// Firing
// ============================================================================

#[test]
fn hovering_around_trigger_fires_once() {
    let reports = run_script(
        cave(),
        0.5,
        120.0,
        &[
            Step::Play,
            Step::Report(24.6),
            Step::Report(24.9),
            Step::Report(25.2),
        ],
    );

    assert_eq!(fires(&reports), vec![25.0]);
    assert_eq!(reports[1].fired, Some(25.0), "Should fire on the first report");
    assert_eq!(reports[3].guard, Some(25.0));
    assert_eq!(reports[3].phase, "paused-at-trigger");
}

#[test]
fn clock_running_into_trigger_pauses_with_choices() {
    let reports = run_script(cave(), 0.5, 120.0, &[Step::Play, Step::Advance(30.0)]);

    let report = &reports[1];
    assert_eq!(report.fired, Some(25.0));
    assert!(report.overlay_visible);
    assert!(report
        .ui
        .contains(&"choices [GO THROUGH -> 35, GO AROUND -> 66]".to_string()));
    // Paused by the trigger, so the clock did not run on to 30s
    assert!(report.position < 25.5);
}

#[test]
fn report_far_from_every_trigger_rearms_guard() {
    let reports = run_script(
        cave(),
        0.5,
        120.0,
        &[
            Step::Play,
            Step::Report(25.0),
            Step::Close,
            Step::Report(30.0),
            Step::Report(25.1),
        ],
    );

    assert_eq!(reports[3].guard, None);
    assert_eq!(fires(&reports), vec![25.0, 25.0], "Seeking back re-fires");
}

#[test]
fn table_order_beats_time_order() {
    let story = Story::load(&fixture("twins.toml")).expect("Should load twins.toml");
    let reports = run_script(
        story,
        0.5,
        400.0,
        &[
            Step::Play,
            Step::Report(327.2),
            Step::Close,
            Step::Report(352.1),
        ],
    );

    assert_eq!(fires(&reports), vec![327.0, 352.0]);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn choosing_pre_arms_guard_before_seek_resolves() {
    let mut player = scripted_player(cave(), 0.5, 120.0);
    apply_step(&mut player, &Step::Play);
    apply_step(&mut player, &Step::Report(24.6));

    player.dispatch(PlayerEvent::SelectChoice(0));

    // Seek is in flight: nothing pumped yet
    assert_eq!(player.state().last_triggered, Some(35.0));
    assert_eq!(
        player.state().phase,
        Phase::Seeking {
            target: 35.0,
            return_to: Some(0)
        }
    );

    player.pump();
    assert_eq!(player.state().phase, Phase::Playing);
    assert!(!player.state().overlay_visible);
}

#[test]
fn navigating_onto_a_trigger_time_suppresses_it() {
    let reports = run_script(
        cave(),
        0.5,
        120.0,
        &[Step::Play, Step::Jump(65.0), Step::Report(65.1)],
    );

    assert_eq!(fires(&reports), Vec::<f64>::new());
    assert_eq!(reports[2].guard, Some(65.0));
}

#[test]
fn failed_seek_keeps_overlay_and_choices() {
    let reports = run_script(
        cave(),
        0.5,
        120.0,
        &[Step::Play, Step::Report(24.6), Step::Fail, Step::Choose(0)],
    );

    let report = &reports[3];
    assert!(report.overlay_visible, "Overlay should stay up");
    assert_eq!(report.phase, "paused-at-trigger");
    assert_eq!(report.position, 24.6);
    assert_eq!(report.guard, Some(35.0));
}

#[test]
fn jump_outside_video_is_reported_and_ignored() {
    let reports = run_script(cave(), 0.5, 120.0, &[Step::Play, Step::Jump(500.0)]);

    let report = &reports[1];
    assert_eq!(report.phase, "playing");
    assert_eq!(report.position, 0.0);
    assert!(report.ui.is_empty());
}

#[test]
fn closing_overlay_resumes_without_seeking() {
    let reports = run_script(
        cave(),
        0.5,
        120.0,
        &[Step::Play, Step::Report(24.6), Step::Close],
    );

    let report = &reports[2];
    assert_eq!(report.phase, "playing");
    assert!(!report.overlay_visible);
    assert_eq!(report.position, 24.6);
    assert_eq!(report.guard, Some(25.0));
}

// ============================================================================
// Play affordance and end of video
// ============================================================================

#[test]
fn reaching_the_end_shows_play_button() {
    let mut player = scripted_player(cave(), 0.5, 120.0);
    for step in [Step::Play, Step::Jump(110.0), Step::Advance(15.0)] {
        apply_step(&mut player, &step);
    }

    assert_eq!(player.state().phase, Phase::Idle);
    assert!(player.surface().play_affordance_visible());
    assert_eq!(player.provider().position(), 120.0);

    // Play at the end is rejected by the provider and changes nothing
    let report = apply_step(&mut player, &Step::Play);
    assert_eq!(report.phase, "idle");
    assert!(report.ui.is_empty());
}

#[test]
fn play_button_is_ignored_while_overlay_is_up() {
    let reports = run_script(
        cave(),
        0.5,
        120.0,
        &[Step::Play, Step::Report(24.6), Step::Play],
    );

    assert!(reports[2].ui.is_empty());
    assert_eq!(reports[2].phase, "paused-at-trigger");
}
