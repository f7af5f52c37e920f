//! Mouse input handling for the terminal player.
//!
//! Handles click-to-jump on the progress bar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::controller::Controller;
use crate::player::debug::jump_to;
use crate::player::provider::PlaybackProvider;
use crate::player::surface::UiSurface;
use crate::player::view::{InputResult, ViewState};

/// Map a column on the progress bar to a time.
///
/// The bar starts at column 1 and is `term_cols - 14` wide, matching
/// [`crate::player::render::render_progress_bar`]. Returns `None` outside
/// the bar.
pub fn time_at_column(column: u16, term_cols: u16, total_duration: f64) -> Option<f64> {
    let bar_start = 1u16;
    let bar_width = (term_cols as usize).saturating_sub(14);
    if bar_width == 0 || column < bar_start || column >= bar_start + bar_width as u16 {
        return None;
    }
    let ratio = (column - bar_start) as f64 / bar_width as f64;
    Some((ratio * total_duration).clamp(0.0, total_duration))
}

/// Handle a mouse event.
pub fn handle_mouse_event<P: PlaybackProvider, U: UiSurface>(
    mouse: MouseEvent,
    view: &mut ViewState,
    controller: &mut Controller<P, U>,
    total_duration: f64,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if mouse.row == view.progress_row() {
            if let Some(target) = time_at_column(mouse.column, view.term_cols, total_duration) {
                jump_to(controller, target);
                view.mark_dirty();
            }
        }
    }

    InputResult::Continue
}
