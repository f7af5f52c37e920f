//! Status bar rendering for the terminal player.
//!
//! Displays playback state, the trigger guard and keyboard hints.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::player::state::PlaybackState;

/// Render a separator line.
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1));
    for _ in 0..width {
        output.push('─');
    }
    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Build the plain-text segments of the status bar.
fn status_segments(state: &PlaybackState, trigger_count: usize) -> (String, String, String) {
    let icon = if state.is_playing { "⏸" } else { "▶" };
    let guard = match state.last_triggered {
        Some(t) => format!("guard:{}s", t),
        None => "guard:armed".to_string(),
    };
    (
        format!("{}  {}", icon, state.phase.label()),
        format!("{}  triggers:{}", guard, trigger_count),
        "space play  1-9 choose  ? help  q quit".to_string(),
    )
}

/// Render the status/controls bar.
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    state: &PlaybackState,
    trigger_count: usize,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const CYAN: &str = "\x1b[36m";
    const DARK_GREY: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let (phase, guard, hints) = status_segments(state, trigger_count);

    let mut output = String::with_capacity(256);
    output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
    output.push_str(WHITE);
    output.push(' ');
    output.push_str(&phase);
    output.push_str("   ");
    output.push_str(CYAN);
    output.push_str(&guard);

    // State icon renders double-width in most terminals
    let used = 1 + phase.width() + 1 + 3 + guard.width();
    let total = width as usize;
    if used + hints.len() + 2 < total {
        let pad = total - used - hints.len() - 1;
        output.push_str(&" ".repeat(pad));
        output.push_str(DARK_GREY);
        output.push_str(&hints);
    }
    output.push_str(RESET);
    write!(stdout, "{}", output)?;
    Ok(())
}
