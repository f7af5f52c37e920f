//! Simulated playback provider.
//!
//! A virtual clock standing in for an embedded video widget. Position
//! advances only when the host calls [`SimulatedPlayer::advance`], which makes
//! the provider deterministic under test and lets the terminal player drive
//! it from wall-clock time.

use std::collections::VecDeque;
use std::time::Duration;

use crate::player::provider::{PlaybackProvider, ProviderError, ProviderEvent, Request};

/// Default interval between position reports.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);

/// A provider backed by a virtual clock.
#[derive(Debug)]
pub struct SimulatedPlayer {
    position: f64,
    paused: bool,
    duration: f64,
    tick_interval: Duration,
    since_tick: Duration,
    reject_next: Option<String>,
    events: VecDeque<ProviderEvent>,
}

impl SimulatedPlayer {
    /// Create a paused player at position zero.
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            paused: true,
            duration,
            tick_interval: DEFAULT_TICK_INTERVAL,
            since_tick: Duration::ZERO,
            reject_next: None,
            events: VecDeque::new(),
        }
    }

    /// Set how often position reports are emitted while playing.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Make the next request fail with `reason`.
    pub fn reject_next(&mut self, reason: impl Into<String>) {
        self.reject_next = Some(reason.into());
    }

    /// Move the clock forward by `elapsed` of media time.
    ///
    /// Emits at most one position report per call, once a full tick interval
    /// has accumulated. Reaching the end pauses the player.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }

        self.position += elapsed.as_secs_f64();
        self.since_tick += elapsed;

        if self.position >= self.duration {
            self.position = self.duration;
            self.paused = true;
            self.since_tick = Duration::ZERO;
            self.events.push_back(ProviderEvent::TimeUpdate(self.position));
            self.events.push_back(ProviderEvent::Paused);
            return;
        }

        if self.since_tick >= self.tick_interval {
            while self.since_tick >= self.tick_interval && !self.tick_interval.is_zero() {
                self.since_tick -= self.tick_interval;
            }
            self.events.push_back(ProviderEvent::TimeUpdate(self.position));
        }
    }

    /// Jump the clock to `seconds` and report it, as if the widget had
    /// emitted a position update there.
    pub fn report_position(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
        self.since_tick = Duration::ZERO;
        self.events.push_back(ProviderEvent::TimeUpdate(seconds));
    }

    fn complete(&mut self, request: Request, result: Result<(), ProviderError>) {
        self.events
            .push_back(ProviderEvent::Completed { request, result });
    }

    fn take_rejection(&mut self, request: Request) -> bool {
        match self.reject_next.take() {
            Some(reason) => {
                self.complete(request, Err(ProviderError::Rejected(reason)));
                true
            }
            None => false,
        }
    }
}

impl PlaybackProvider for SimulatedPlayer {
    fn request_play(&mut self) {
        let request = Request::Play;
        if self.take_rejection(request) {
            return;
        }
        if self.position >= self.duration {
            self.complete(request, Err(ProviderError::Ended));
            return;
        }
        if self.paused {
            self.paused = false;
            self.since_tick = Duration::ZERO;
            self.events.push_back(ProviderEvent::Played);
        }
        self.complete(request, Ok(()));
    }

    fn request_pause(&mut self) {
        let request = Request::Pause;
        if self.take_rejection(request) {
            return;
        }
        if !self.paused {
            self.paused = true;
            self.events.push_back(ProviderEvent::Paused);
        }
        self.complete(request, Ok(()));
    }

    fn request_seek(&mut self, seconds: f64) {
        let request = Request::Seek(seconds);
        if self.take_rejection(request) {
            return;
        }
        if !(0.0..=self.duration).contains(&seconds) {
            self.complete(
                request,
                Err(ProviderError::OutOfRange {
                    position: seconds,
                    duration: self.duration,
                }),
            );
            return;
        }
        self.position = seconds;
        self.since_tick = Duration::ZERO;
        self.complete(request, Ok(()));
        self.events.push_back(ProviderEvent::TimeUpdate(seconds));
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn drain_events(&mut self) -> Vec<ProviderEvent> {
        self.events.drain(..).collect()
    }
}
