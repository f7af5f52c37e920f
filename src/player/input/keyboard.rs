//! Keyboard input handling for the terminal player.
//!
//! Maps keys to viewer actions: the play affordance, choice buttons, the
//! overlay's close button and the debug helpers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::controller::{Controller, PlayerEvent};
use crate::player::debug::jump_to;
use crate::player::provider::PlaybackProvider;
use crate::player::render::MAX_KEYED_CHOICES;
use crate::player::surface::UiSurface;
use crate::player::view::{InputResult, ViewState};

/// Seconds moved by the debug jump keys.
const JUMP_STEP: f64 = 5.0;

/// Handle a keyboard event.
pub fn handle_key_event<P: PlaybackProvider, U: UiSurface>(
    key: KeyEvent,
    view: &mut ViewState,
    controller: &mut Controller<P, U>,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if view.show_help {
        view.toggle_help();
        return InputResult::Continue;
    }

    view.needs_render = true;

    match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Panels ===
        KeyCode::Char('?') => {
            view.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char('d') => {
            view.toggle_debug();
            InputResult::Continue
        }

        // === Playback ===
        KeyCode::Char(' ') => {
            controller.dispatch(PlayerEvent::PlayButton);
            InputResult::Continue
        }

        // === Overlay ===
        KeyCode::Char(c @ '1'..='9') => {
            let choice = c as usize - '1' as usize;
            if choice < MAX_KEYED_CHOICES {
                controller.dispatch(PlayerEvent::SelectChoice(choice));
            }
            InputResult::Continue
        }
        KeyCode::Esc | KeyCode::Char('x') => {
            if controller.state().overlay_visible {
                controller.dispatch(PlayerEvent::CloseOverlay);
            } else if view.show_debug {
                view.toggle_debug();
            }
            InputResult::Continue
        }

        // === Debug jumps ===
        KeyCode::Char('<') | KeyCode::Char(',') => {
            let target = (controller.provider().position() - JUMP_STEP).max(0.0);
            jump_to(controller, target);
            view.mark_dirty();
            InputResult::Continue
        }
        KeyCode::Char('>') | KeyCode::Char('.') => {
            let target = controller.provider().position() + JUMP_STEP;
            jump_to(controller, target);
            view.mark_dirty();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
