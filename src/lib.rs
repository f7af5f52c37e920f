//! branchplay - interactive branching-video player
//!
//! A video plays, pauses at authored trigger points and offers labeled
//! choices that jump playback elsewhere. The library exposes the timestamp
//! reconciler, the owning controller and the two collaborator traits
//! (`PlaybackProvider`, `UiSurface`); the binary drives a simulated player
//! in the terminal.

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod script;
pub mod story;
pub mod theme;

pub use config::Config;
pub use player::{Controller, PlaybackState, PlayerEvent, Reconciler};
pub use story::{Choice, Story, TriggerPoint};
