//! Player state management
//!
//! Contains the central `PlaybackState` struct that the controller owns and
//! the reconciler mutates, as well as the `Phase` state machine.

/// Where the viewer is in the branching flow.
///
/// ```text
/// Idle --play--> Playing --hit--> PausedAtTrigger --choice--> Seeking --ok--> Playing
///                                 PausedAtTrigger --close---> Playing
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Paused by the viewer (or not yet started); play affordance visible
    Idle,
    /// Media is playing and time updates are reconciled
    Playing,
    /// Paused by a trigger; the overlay shows that trigger's choices
    PausedAtTrigger {
        /// Index of the trigger in the story table
        trigger: usize,
    },
    /// A seek was requested and has not resolved yet
    Seeking {
        target: f64,
        /// Trigger to return to if the seek is rejected
        return_to: Option<usize>,
    },
}

impl Phase {
    /// Short label for status lines and transcripts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::PausedAtTrigger { .. } => "paused-at-trigger",
            Self::Seeking { .. } => "seeking",
        }
    }

    pub fn is_paused_at_trigger(&self) -> bool {
        matches!(self, Self::PausedAtTrigger { .. })
    }
}

/// Process-wide playback state.
///
/// Created at startup, mutated only by the reconciler and by viewer
/// navigation, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Last reported playback position in seconds
    pub current_time: f64,
    /// Whether the provider last confirmed it is playing
    pub is_playing: bool,
    /// Re-entrancy guard: time of the most recently fired trigger (or a
    /// pre-armed navigation target). `None` means every trigger is armed.
    pub last_triggered: Option<f64>,
    /// Whether the choice overlay is shown
    pub overlay_visible: bool,
    /// Whether the play affordance is shown
    pub play_affordance_visible: bool,
    /// State machine position
    pub phase: Phase,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            is_playing: false,
            last_triggered: None,
            overlay_visible: false,
            play_affordance_visible: true,
            phase: Phase::Idle,
        }
    }

    /// Index of the trigger whose choices are on screen, if any.
    pub fn active_trigger(&self) -> Option<usize> {
        match self.phase {
            Phase::PausedAtTrigger { trigger } => Some(trigger),
            Phase::Seeking { return_to, .. } => return_to,
            _ => None,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
