//! Subcommand handlers

pub mod config;
pub mod play;
pub mod simulate;
pub mod story;

use std::path::PathBuf;

use anyhow::{Context, Result};

use branchplay::{Config, Story};

/// Story, settings and the values resolved from both.
pub struct Session {
    pub story: Story,
    pub tolerance: f64,
    pub duration: f64,
}

/// Resolve the story and playback settings.
///
/// Story: the given path, else the configured default, else the bundled
/// sample. Tolerance: the flag, else the story's override, else config.
pub fn load_session(path: Option<PathBuf>, tolerance: Option<f64>) -> Result<Session> {
    let config = Config::load()?;
    let story = match path.or_else(|| config.story.path.clone()) {
        Some(path) => Story::load(&path)
            .with_context(|| format!("Failed to load story {}", path.display()))?,
        None => Story::builtin(),
    };

    let tolerance = tolerance
        .or(story.tolerance)
        .unwrap_or(config.player.tolerance);
    let duration = story
        .duration
        .or(config.player.duration)
        .unwrap_or_else(|| story.effective_duration());

    Ok(Session {
        story,
        tolerance,
        duration,
    })
}
