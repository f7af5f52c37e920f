//! Timestamp reconciliation.
//!
//! Turns a continuous stream of position reports into discrete trigger
//! firings. A trigger fires when the position lands within `tolerance` of its
//! time, unless the guard already holds that time. The guard is cleared only
//! once the position is further than `2 × tolerance` from every trigger, so a
//! trigger fires at most once while playback hovers around it.

use tracing::debug;

use crate::player::state::PlaybackState;
use crate::story::TriggerPoint;

/// Default fire tolerance in seconds.
pub const FIRE_TOLERANCE: f64 = 0.5;

/// Outcome of one reconciliation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Nothing to do
    None,
    /// The trigger at `index` in the table fired
    Fire { index: usize },
}

impl Action {
    pub fn fired(&self) -> Option<usize> {
        match self {
            Self::Fire { index } => Some(*index),
            Self::None => None,
        }
    }
}

/// Decides whether a position report fires a trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reconciler {
    tolerance: f64,
}

impl Reconciler {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Width of the band outside of which the guard resets.
    pub fn disarm_band(&self) -> f64 {
        self.tolerance * 2.0
    }

    /// Reconcile one position report against the trigger table.
    ///
    /// Scans `triggers` in table order and fires the first armed trigger
    /// within tolerance. Then, independently, re-arms everything if the
    /// position is outside the disarm band of every trigger.
    pub fn on_time_update(
        &self,
        state: &mut PlaybackState,
        triggers: &[TriggerPoint],
        current_time: f64,
    ) -> Action {
        let mut action = Action::None;

        for (index, trigger) in triggers.iter().enumerate() {
            let at_trigger = (current_time - trigger.time).abs() < self.tolerance;
            let armed = state.last_triggered != Some(trigger.time);

            if at_trigger && armed {
                state.last_triggered = Some(trigger.time);
                action = Action::Fire { index };
                break;
            }
        }

        let near_any = triggers
            .iter()
            .any(|trigger| (current_time - trigger.time).abs() < self.disarm_band());

        if !near_any && state.last_triggered.is_some() {
            debug!(current_time, "left every trigger band, guard re-armed");
            state.last_triggered = None;
        }

        action
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(FIRE_TOLERANCE)
    }
}
