//! UiSurface trait and a recording implementation.

use crate::story::Choice;

/// The visual surface the controller drives.
///
/// Implementations only display; they never call back into the controller.
/// Viewer input reaches the controller as `PlayerEvent`s from the host loop.
pub trait UiSurface {
    /// Replace the overlay's buttons with `choices`, in order.
    fn render_choices(&mut self, choices: &[Choice]);

    /// Show or hide the choice overlay.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Show or hide the play affordance.
    fn set_play_affordance_visible(&mut self, visible: bool);
}

/// A single call made on a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    RenderChoices(Vec<Choice>),
    Overlay(bool),
    PlayAffordance(bool),
}

impl std::fmt::Display for SurfaceCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RenderChoices(choices) => {
                let labels: Vec<String> = choices
                    .iter()
                    .map(|c| format!("{} -> {}", c.label, c.target))
                    .collect();
                write!(f, "choices [{}]", labels.join(", "))
            }
            Self::Overlay(true) => write!(f, "overlay shown"),
            Self::Overlay(false) => write!(f, "overlay hidden"),
            Self::PlayAffordance(true) => write!(f, "play button shown"),
            Self::PlayAffordance(false) => write!(f, "play button hidden"),
        }
    }
}

/// A surface that records every call instead of drawing.
///
/// Used by `branchplay simulate` and by tests.
#[derive(Debug, Default)]
pub struct Transcript {
    calls: Vec<SurfaceCall>,
    choices: Vec<Choice>,
    overlay_visible: bool,
    play_affordance_visible: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call made so far.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Remove and return the calls made since the last take.
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Choices currently rendered in the overlay.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn play_affordance_visible(&self) -> bool {
        self.play_affordance_visible
    }
}

impl UiSurface for Transcript {
    fn render_choices(&mut self, choices: &[Choice]) {
        self.choices = choices.to_vec();
        self.calls.push(SurfaceCall::RenderChoices(choices.to_vec()));
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
        self.calls.push(SurfaceCall::Overlay(visible));
    }

    fn set_play_affordance_visible(&mut self, visible: bool) {
        self.play_affordance_visible = visible;
        self.calls.push(SurfaceCall::PlayAffordance(visible));
    }
}
