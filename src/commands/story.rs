//! Story subcommands handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use branchplay::cli::OutputFormat;
use branchplay::player::debug::dump_table;
use branchplay::theme::current_theme;

use super::load_session;

/// Print the trigger table in configuration order.
pub fn handle_show(story: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let session = load_session(story, None)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&session.story)?),
        OutputFormat::Text => {
            let theme = current_theme();
            println!("{}", theme.accent_text(session.story.display_title()));
            println!(
                "{}",
                theme.secondary_text(&format!(
                    "{} triggers, tolerance {}s, duration {}s",
                    session.story.len(),
                    session.tolerance,
                    session.duration
                ))
            );
            print!("{}", theme.primary_text(&dump_table(&session.story)));
            println!();
        }
    }
    Ok(())
}

/// Lint a story. Exits non-zero when anything was found.
pub fn handle_check(story: Option<PathBuf>, tolerance: Option<f64>) -> Result<()> {
    let session = load_session(story, tolerance)?;
    let theme = current_theme();
    let warnings = session.story.check(session.tolerance);

    if warnings.is_empty() {
        println!(
            "{}",
            theme.success_text(&format!(
                "{}: {} triggers, no problems found",
                session.story.display_title(),
                session.story.len()
            ))
        );
        return Ok(());
    }

    for warning in &warnings {
        println!("{}", theme.warning_text(&format!("warning: {}", warning)));
    }
    bail!("{} problem(s) found", warnings.len());
}
