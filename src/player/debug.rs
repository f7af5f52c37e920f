//! Debug surface for manual testing.
//!
//! Not a production API: these helpers print the playhead, dump the trigger
//! table and jump around, the way a developer would poke at the player from a
//! console.

use std::fmt::Write;

use crate::player::controller::Controller;
use crate::player::provider::PlaybackProvider;
use crate::player::surface::UiSurface;
use crate::story::Story;

/// `M:SS` with unpadded minutes. Negative times read as zero.
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds as u64;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Current provider position as `M:SS (Ns)`.
pub fn current_position<P: PlaybackProvider>(provider: &P) -> String {
    let seconds = provider.position();
    format!("{} ({}s)", format_time(seconds), seconds)
}

/// One line per trigger, in table order.
///
/// ```text
///   1. 0:25 (25s) GO THROUGH -> 35s | GO AROUND -> 66s
/// ```
pub fn dump_table(story: &Story) -> String {
    let mut out = String::new();
    for (i, trigger) in story.triggers.iter().enumerate() {
        let time = if trigger.is_inert() {
            "-:-- (no time)".to_string()
        } else {
            format!("{} ({}s)", format_time(trigger.time), trigger.time)
        };
        let choices: Vec<String> = trigger
            .links
            .iter()
            .map(|c| format!("{} -> {}s", c.label, c.target))
            .collect();
        let _ = write!(out, "{:>3}. {}", i + 1, time);
        if !choices.is_empty() {
            let _ = write!(out, " {}", choices.join(" | "));
        }
        out.push('\n');
    }
    out
}

/// Jump playback to `seconds`, exactly as if a choice targeting it was picked.
pub fn jump_to<P: PlaybackProvider, U: UiSurface>(
    controller: &mut Controller<P, U>,
    seconds: f64,
) {
    controller.navigate(seconds);
}
