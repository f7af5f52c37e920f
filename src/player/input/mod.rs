//! Input handling for the terminal player.
//!
//! This module handles keyboard and mouse input events, turning them into
//! controller events and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::player::controller::Controller;
use crate::player::provider::PlaybackProvider;
use crate::player::surface::UiSurface;
use crate::player::view::{InputResult, ViewState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `view` - Mutable reference to the view state
/// * `controller` - The player controller receiving viewer actions
/// * `total_duration` - Length of the video in seconds
pub fn handle_event<P: PlaybackProvider, U: UiSurface>(
    event: Event,
    view: &mut ViewState,
    controller: &mut Controller<P, U>,
    total_duration: f64,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, view, controller),
        Event::Mouse(mouse) => handle_mouse_event(mouse, view, controller, total_duration),
        Event::Resize(cols, rows) => {
            view.handle_resize(cols, rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}
