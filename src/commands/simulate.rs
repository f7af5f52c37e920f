//! Simulate command handler

use std::path::PathBuf;

use anyhow::Result;

use branchplay::cli::OutputFormat;
use branchplay::script::{run_script, Step};
use branchplay::theme::current_theme;

use super::load_session;

/// Run scripted steps and print one report per step.
pub fn handle(
    story: Option<PathBuf>,
    tolerance: Option<f64>,
    format: OutputFormat,
    steps: &[Step],
) -> Result<()> {
    let session = load_session(story, tolerance)?;
    let reports = run_script(session.story, session.tolerance, session.duration, steps);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            let theme = current_theme();
            for report in &reports {
                let text = report.to_string();
                if report.fired.is_some() {
                    println!("{}", theme.accent_text(&text));
                } else {
                    println!("{}", text);
                }
            }
        }
    }
    Ok(())
}
