//! Rendering components for the terminal player.
//!
//! This module contains all the UI rendering functions for the player,
//! including the screen area, choice overlay, progress bar, status bar,
//! help overlay and debug panel.

mod debug_panel;
mod help;
mod overlay;
mod progress;
mod screen;
mod status;

pub use debug_panel::{build_debug_lines, render_debug_panel};
pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use overlay::{build_overlay_lines, render_overlay, MAX_KEYED_CHOICES};
pub use progress::{build_progress_bar_chars, format_duration, render_progress_bar};
pub use screen::{clear_rows, render_screen, render_title};
pub use status::{render_separator_line, render_status_bar};
