//! PlaybackProvider trait and related types.
//!
//! The provider is the video widget the player drives. Requests are
//! fire-and-forget; their outcome arrives later as a
//! [`ProviderEvent::Completed`] alongside the provider's own notifications.

/// A request sent to the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    Play,
    Pause,
    Seek(f64),
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Play => write!(f, "play"),
            Self::Pause => write!(f, "pause"),
            Self::Seek(target) => write!(f, "seek to {}s", target),
        }
    }
}

/// Why a provider rejected a request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("position {position}s is outside the video (0-{duration}s)")]
    OutOfRange { position: f64, duration: f64 },

    #[error("playback has reached the end of the video")]
    Ended,

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Notification emitted by a provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    /// Periodic position report, in seconds
    TimeUpdate(f64),
    /// Playback started
    Played,
    /// Playback stopped
    Paused,
    /// A previously issued request resolved
    Completed {
        request: Request,
        result: Result<(), ProviderError>,
    },
}

/// A video playback widget that can be driven by the controller.
///
/// Each implementation wraps a concrete player (an embedded widget, a
/// simulated clock, a test double) and reports back through
/// [`PlaybackProvider::drain_events`].
pub trait PlaybackProvider {
    /// Ask the provider to start playing.
    fn request_play(&mut self);

    /// Ask the provider to pause.
    fn request_pause(&mut self);

    /// Ask the provider to jump to `seconds`.
    fn request_seek(&mut self, seconds: f64);

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Whether the provider is currently paused.
    fn is_paused(&self) -> bool;

    /// Take every notification emitted since the last call, oldest first.
    fn drain_events(&mut self) -> Vec<ProviderEvent>;
}
