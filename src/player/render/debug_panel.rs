//! Debug panel: playhead, guard and the trigger table.

use std::io::{self, Write};

use anyhow::Result;

use crate::player::debug::{current_position, dump_table};
use crate::player::provider::PlaybackProvider;
use crate::player::state::PlaybackState;
use crate::story::Story;

/// Lines shown in the debug panel.
pub fn build_debug_lines<P: PlaybackProvider>(
    provider: &P,
    state: &PlaybackState,
    story: &Story,
) -> Vec<String> {
    let mut lines = vec![
        format!("position  {}", current_position(provider)),
        format!(
            "guard     {}",
            state
                .last_triggered
                .map(|t| format!("{}s", t))
                .unwrap_or_else(|| "armed".to_string())
        ),
        format!("phase     {}", state.phase.label()),
        String::new(),
    ];
    lines.extend(dump_table(story).lines().map(str::to_string));
    lines
}

/// Render the debug panel in the screen area, starting below the title.
pub fn render_debug_panel(
    stdout: &mut io::Stdout,
    screen_rows: u16,
    lines: &[String],
) -> Result<()> {
    let mut output = String::new();
    for (i, line) in lines.iter().enumerate() {
        let row = 3 + i;
        if row > screen_rows as usize {
            break;
        }
        output.push_str(&format!("\x1b[{};3H\x1b[36m{}\x1b[0m", row, line));
    }
    write!(stdout, "{}", output)?;
    Ok(())
}
