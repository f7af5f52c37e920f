//! Play command handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use branchplay::player::{play_story, PlayOptions, PlaybackResult};
use branchplay::Config;

use super::load_session;

/// Play a story interactively.
#[cfg(not(tarpaulin_include))]
pub fn handle(story: Option<PathBuf>, tolerance: Option<f64>) -> Result<()> {
    let session = load_session(story, tolerance)?;
    let config = Config::load()?;

    let options = PlayOptions {
        tolerance: session.tolerance,
        tick_interval: config.player.tick_interval(),
        duration: session.duration,
    };

    match play_story(session.story, &options)? {
        PlaybackResult::Quit => Ok(()),
        PlaybackResult::Error(e) => bail!("Playback failed: {}", e),
    }
}
