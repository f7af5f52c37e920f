//! The "video" area of the terminal player.
//!
//! There is no picture to show, so the screen area displays the title, the
//! playhead and the play affordance.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use super::progress::format_duration;

const PLAY_AFFORDANCE: &str = "▶  press space to play";

/// Blank rows `[start, end)`.
pub fn clear_rows(stdout: &mut io::Stdout, start: u16, end: u16) -> Result<()> {
    let mut output = String::new();
    for row in start..end {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
    }
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the title on the first row.
pub fn render_title(stdout: &mut io::Stdout, title: &str) -> Result<()> {
    write!(stdout, "\x1b[1;1H\x1b[2K\x1b[1;32m {}\x1b[0m", title)?;
    Ok(())
}

/// Render the centered playhead and, when visible, the play affordance.
pub fn render_screen(
    stdout: &mut io::Stdout,
    width: u16,
    screen_rows: u16,
    current_time: f64,
    play_affordance_visible: bool,
) -> Result<()> {
    let clock = format_duration(current_time);
    let mid = screen_rows / 2;

    let center_col = |text: &str| (width as usize).saturating_sub(text.width()) / 2 + 1;

    write!(
        stdout,
        "\x1b[{};{}H\x1b[97m{}\x1b[0m",
        mid.max(1),
        center_col(&clock),
        clock
    )?;

    if play_affordance_visible && mid + 2 <= screen_rows {
        write!(
            stdout,
            "\x1b[{};{}H\x1b[32m{}\x1b[0m",
            mid + 2,
            center_col(PLAY_AFFORDANCE),
            PLAY_AFFORDANCE
        )?;
    }
    Ok(())
}
