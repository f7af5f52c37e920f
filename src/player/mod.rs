//! Branching video player
//!
//! Pauses playback at authored trigger points and offers choices that jump
//! to other times.
//!
//! # Architecture
//!
//! - `reconciler`: the timestamp state machine (fire / guard / re-arm)
//! - `state`: `PlaybackState` and the `Phase` state machine
//! - `controller`: owns state and collaborators, dispatches `PlayerEvent`s
//! - `provider`: the `PlaybackProvider` trait the video widget implements
//! - `surface`: the `UiSurface` trait the overlay implements
//! - `sim`: a virtual-clock provider
//! - `debug`: position / table dump / jump helpers for manual testing
//! - `input/`, `render/`, `view`, `native`: the interactive terminal player
//!
//! # Usage
//!
//! ```
//! use branchplay::player::{
//!     Controller, PlayerEvent, Reconciler, SimulatedPlayer, Transcript,
//! };
//! use branchplay::story::Story;
//!
//! let mut player = Controller::new(
//!     Story::builtin(),
//!     Reconciler::default(),
//!     SimulatedPlayer::new(420.0),
//!     Transcript::new(),
//! );
//! player.dispatch(PlayerEvent::PlayButton);
//! player.pump();
//!
//! player.provider_mut().report_position(24.6);
//! player.pump();
//! assert!(player.state().overlay_visible);
//! ```

pub mod controller;
pub mod debug;
pub(crate) mod input;
mod native;
pub mod provider;
pub mod reconciler;
pub mod render;
pub mod sim;
pub mod state;
pub mod surface;
pub mod view;

pub use controller::{Controller, PlayerEvent};
pub use native::{play_story, PlaybackResult, PlayOptions, TerminalSurface};
pub use provider::{PlaybackProvider, ProviderError, ProviderEvent, Request};
pub use reconciler::{Action, Reconciler, FIRE_TOLERANCE};
pub use sim::{SimulatedPlayer, DEFAULT_TICK_INTERVAL};
pub use state::{Phase, PlaybackState};
pub use surface::{SurfaceCall, Transcript, UiSurface};
pub use view::{InputResult, ViewState};
