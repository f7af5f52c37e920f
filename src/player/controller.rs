//! The owning controller.
//!
//! Holds the story, the playback state, the reconciler and both
//! collaborators. Every input (provider notifications and viewer actions)
//! arrives as a [`PlayerEvent`] and is handled synchronously on the caller's
//! thread. Provider requests are issued optimistically: guard and phase are
//! updated before the provider confirms.

use tracing::{debug, info, warn};

use crate::player::provider::{PlaybackProvider, ProviderError, ProviderEvent, Request};
use crate::player::reconciler::{Action, Reconciler};
use crate::player::state::{PlaybackState, Phase};
use crate::player::surface::UiSurface;
use crate::story::{Story, TriggerPoint};

/// An input to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Periodic position report from the provider
    TimeUpdate(f64),
    /// Provider started playing
    Played,
    /// Provider stopped playing
    Paused,
    /// A provider request resolved
    Completed {
        request: Request,
        result: Result<(), ProviderError>,
    },
    /// Viewer pressed the play/pause affordance
    PlayButton,
    /// Viewer picked the choice at this position in the overlay
    SelectChoice(usize),
    /// Viewer dismissed the overlay without choosing
    CloseOverlay,
    /// Seek to a time and resume (choice targets, debug jumps)
    Navigate(f64),
}

impl From<ProviderEvent> for PlayerEvent {
    fn from(event: ProviderEvent) -> Self {
        match event {
            ProviderEvent::TimeUpdate(t) => Self::TimeUpdate(t),
            ProviderEvent::Played => Self::Played,
            ProviderEvent::Paused => Self::Paused,
            ProviderEvent::Completed { request, result } => Self::Completed { request, result },
        }
    }
}

/// Drives a provider and a surface from a story.
pub struct Controller<P, U> {
    story: Story,
    state: PlaybackState,
    reconciler: Reconciler,
    provider: P,
    surface: U,
}

impl<P: PlaybackProvider, U: UiSurface> Controller<P, U> {
    /// Create a controller in the idle state with the play affordance shown.
    pub fn new(story: Story, reconciler: Reconciler, provider: P, mut surface: U) -> Self {
        let state = PlaybackState::new();
        surface.set_play_affordance_visible(true);

        info!(
            triggers = story.len(),
            tolerance = reconciler.tolerance(),
            "interactive player initialized"
        );

        Self {
            story,
            state,
            reconciler,
            provider,
            surface,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    /// The trigger whose choices are currently on screen.
    pub fn active_trigger(&self) -> Option<&TriggerPoint> {
        self.state
            .active_trigger()
            .and_then(|index| self.story.triggers.get(index))
    }

    /// Drain the provider and dispatch its notifications.
    ///
    /// Handling an event may issue new requests; their notifications are
    /// drained in the same call. Returns the number of events handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let events = self.provider.drain_events();
            if events.is_empty() {
                return handled;
            }
            for event in events {
                self.dispatch(event.into());
                handled += 1;
            }
        }
    }

    /// Handle one event. Returns the reconciler's action for time updates.
    pub fn dispatch(&mut self, event: PlayerEvent) -> Action {
        match event {
            PlayerEvent::TimeUpdate(t) => return self.on_time_update(t),
            PlayerEvent::Played => self.on_played(),
            PlayerEvent::Paused => self.on_paused(),
            PlayerEvent::Completed { request, result } => self.on_completed(request, result),
            PlayerEvent::PlayButton => self.on_play_button(),
            PlayerEvent::SelectChoice(choice) => self.select_choice(choice),
            PlayerEvent::CloseOverlay => self.close_overlay(),
            PlayerEvent::Navigate(target) => self.navigate(target),
        }
        Action::None
    }

    fn on_time_update(&mut self, current_time: f64) -> Action {
        self.state.current_time = current_time;
        let action = self
            .reconciler
            .on_time_update(&mut self.state, &self.story.triggers, current_time);

        if let Action::Fire { index } = action {
            self.fire(index);
        }
        action
    }

    fn fire(&mut self, index: usize) {
        let trigger = &self.story.triggers[index];
        info!(time = trigger.time, choices = trigger.links.len(), "reached trigger");

        self.provider.request_pause();
        self.surface.render_choices(&trigger.links);
        self.set_play_affordance(false);
        self.set_overlay(true);
        self.state.phase = Phase::PausedAtTrigger { trigger: index };
    }

    /// Pick a choice from the active trigger's overlay.
    ///
    /// Ignored when no overlay is active or the index is out of range.
    pub fn select_choice(&mut self, choice: usize) {
        let Some(index) = self.state.active_trigger() else {
            debug!(choice, "no active trigger, selection ignored");
            return;
        };
        let Some(target) = self.story.triggers[index].links.get(choice).map(|c| c.target) else {
            debug!(choice, "choice out of range, selection ignored");
            return;
        };
        self.navigate(target);
    }

    /// Seek to `target` and resume playback once the seek resolves.
    ///
    /// The guard is set to `target` before the seek is issued, so a trigger
    /// at the destination does not fire on the next report.
    pub fn navigate(&mut self, target: f64) {
        info!(target, "navigating");

        self.state.last_triggered = Some(target);
        let return_to = self.state.active_trigger();
        self.state.phase = Phase::Seeking { target, return_to };
        self.provider.request_seek(target);
    }

    /// Dismiss the overlay and resume without navigating.
    pub fn close_overlay(&mut self) {
        self.set_overlay(false);
        self.state.phase = Phase::Playing;
        self.provider.request_play();
    }

    fn on_play_button(&mut self) {
        if self.state.overlay_visible {
            debug!("overlay visible, play button ignored");
            return;
        }
        if self.provider.is_paused() {
            self.provider.request_play();
        } else {
            self.provider.request_pause();
        }
    }

    fn on_played(&mut self) {
        self.state.is_playing = true;
        self.set_play_affordance(false);
        if !self.state.phase.is_paused_at_trigger() {
            self.set_overlay(false);
        }
        if self.state.phase == Phase::Idle {
            self.state.phase = Phase::Playing;
        }
    }

    fn on_paused(&mut self) {
        self.state.is_playing = false;
        if self.state.phase.is_paused_at_trigger() {
            return;
        }
        self.set_play_affordance(true);
        if self.state.phase == Phase::Playing {
            self.state.phase = Phase::Idle;
        }
    }

    fn on_completed(&mut self, request: Request, result: Result<(), ProviderError>) {
        match (request, result) {
            (Request::Seek(target), Ok(())) => {
                info!(target, "navigated");
                self.set_overlay(false);
                self.state.phase = Phase::Playing;
                self.provider.request_play();
            }
            (Request::Seek(target), Err(e)) => {
                warn!(target, error = %e, "error navigating to timestamp");
                if let Phase::Seeking { return_to, .. } = self.state.phase {
                    self.state.phase = match return_to {
                        Some(trigger) => Phase::PausedAtTrigger { trigger },
                        None if self.state.is_playing => Phase::Playing,
                        None => Phase::Idle,
                    };
                }
            }
            (Request::Pause, Ok(())) => {
                debug!(position = self.state.current_time, "video paused");
            }
            (Request::Play, Ok(())) => {
                self.state.is_playing = true;
            }
            (request, Err(e)) => {
                warn!(%request, error = %e, "provider rejected request");
            }
        }
    }

    fn set_overlay(&mut self, visible: bool) {
        self.state.overlay_visible = visible;
        self.surface.set_overlay_visible(visible);
    }

    fn set_play_affordance(&mut self, visible: bool) {
        self.state.play_affordance_visible = visible;
        self.surface.set_play_affordance_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::sim::SimulatedPlayer;
    use crate::player::surface::Transcript;
    use crate::story::Choice;

    fn story() -> Story {
        Story::new(vec![
            TriggerPoint::new(
                25.0,
                vec![Choice::new("GO THROUGH", 35.0), Choice::new("GO AROUND", 66.0)],
            ),
            TriggerPoint::new(65.0, vec![Choice::new("CONTINUE", 77.0)]),
        ])
    }

    fn controller() -> Controller<SimulatedPlayer, Transcript> {
        Controller::new(
            story(),
            Reconciler::default(),
            SimulatedPlayer::new(120.0),
            Transcript::new(),
        )
    }

    fn start(c: &mut Controller<SimulatedPlayer, Transcript>) {
        c.dispatch(PlayerEvent::PlayButton);
        c.pump();
    }

    fn reach(c: &mut Controller<SimulatedPlayer, Transcript>, seconds: f64) {
        c.provider_mut().report_position(seconds);
        c.pump();
    }

    #[test]
    fn starts_idle_with_play_affordance() {
        let c = controller();
        assert_eq!(c.state().phase, Phase::Idle);
        assert!(c.surface().play_affordance_visible());
        assert!(!c.surface().overlay_visible());
    }

    #[test]
    fn play_button_starts_playback() {
        let mut c = controller();
        start(&mut c);

        assert_eq!(c.state().phase, Phase::Playing);
        assert!(c.state().is_playing);
        assert!(!c.surface().play_affordance_visible());
    }

    #[test]
    fn fire_pauses_and_shows_choices() {
        let mut c = controller();
        start(&mut c);

        let action = c.dispatch(PlayerEvent::TimeUpdate(24.6));
        c.pump();

        assert_eq!(action, Action::Fire { index: 0 });
        assert_eq!(c.state().last_triggered, Some(25.0));
        assert_eq!(c.state().phase, Phase::PausedAtTrigger { trigger: 0 });
        assert!(c.provider().is_paused());
        assert!(c.surface().overlay_visible());
        assert!(!c.surface().play_affordance_visible());
        assert_eq!(c.surface().choices().len(), 2);
        assert_eq!(c.active_trigger().map(|t| t.time), Some(25.0));
    }

    #[test]
    fn selecting_choice_seeks_and_resumes() {
        let mut c = controller();
        start(&mut c);
        reach(&mut c, 25.0);

        c.dispatch(PlayerEvent::SelectChoice(0));
        assert_eq!(c.state().last_triggered, Some(35.0));
        c.pump();

        assert_eq!(c.provider().position(), 35.0);
        assert_eq!(c.state().phase, Phase::Playing);
        assert!(!c.surface().overlay_visible());
        assert!(!c.provider().is_paused());
    }

    #[test]
    fn rejected_seek_keeps_overlay() {
        let mut c = controller();
        start(&mut c);
        reach(&mut c, 25.0);

        c.provider_mut().reject_next("offline");
        c.dispatch(PlayerEvent::SelectChoice(1));
        c.pump();

        assert_eq!(c.state().last_triggered, Some(66.0));
        assert!(c.surface().overlay_visible());
        assert_eq!(c.state().phase, Phase::PausedAtTrigger { trigger: 0 });

        // Retry succeeds
        c.dispatch(PlayerEvent::SelectChoice(1));
        c.pump();
        assert!(!c.surface().overlay_visible());
        assert_eq!(c.provider().position(), 66.0);
    }

    #[test]
    fn close_overlay_resumes_without_seeking() {
        let mut c = controller();
        start(&mut c);
        reach(&mut c, 25.0);

        c.dispatch(PlayerEvent::CloseOverlay);
        c.pump();

        assert_eq!(c.state().phase, Phase::Playing);
        assert!(!c.surface().overlay_visible());
        assert!(!c.provider().is_paused());
        assert_eq!(c.provider().position(), 25.0);
    }

    #[test]
    fn play_button_ignored_while_overlay_visible() {
        let mut c = controller();
        start(&mut c);
        reach(&mut c, 25.0);

        c.dispatch(PlayerEvent::PlayButton);
        c.pump();

        assert!(c.provider().is_paused());
        assert!(c.surface().overlay_visible());
    }

    #[test]
    fn manual_pause_shows_play_affordance() {
        let mut c = controller();
        start(&mut c);

        c.dispatch(PlayerEvent::PlayButton);
        c.pump();

        assert_eq!(c.state().phase, Phase::Idle);
        assert!(c.surface().play_affordance_visible());
        assert!(!c.state().is_playing);
    }

    #[test]
    fn select_choice_without_overlay_is_ignored() {
        let mut c = controller();
        c.dispatch(PlayerEvent::SelectChoice(0));
        assert_eq!(c.state().phase, Phase::Idle);
        assert_eq!(c.state().last_triggered, None);
    }

    #[test]
    fn select_choice_out_of_range_is_ignored() {
        let mut c = controller();
        start(&mut c);
        reach(&mut c, 65.0);

        c.dispatch(PlayerEvent::SelectChoice(4));
        assert_eq!(c.state().phase, Phase::PausedAtTrigger { trigger: 1 });
        assert_eq!(c.state().last_triggered, Some(65.0));
    }

    #[test]
    fn navigate_from_idle_returns_to_idle_on_failure() {
        let mut c = controller();
        c.dispatch(PlayerEvent::Navigate(500.0));
        c.pump();

        assert_eq!(c.state().last_triggered, Some(500.0));
        assert_eq!(c.state().phase, Phase::Idle);
    }
}
