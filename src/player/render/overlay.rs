//! Choice overlay rendering.
//!
//! Draws the boxed list of choice buttons shown while paused at a trigger.
//! Each button is numbered; the number is its key.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::story::Choice;

/// Choices beyond this count are listed but have no key.
pub const MAX_KEYED_CHOICES: usize = 9;

const TITLE: &str = "What now?";
const FOOTER: &str = "Esc close";
const MIN_INNER_WIDTH: usize = 24;

/// Build the overlay box, one string per row.
///
/// The box is sized to the widest label and truncated to `max_width`
/// columns when the terminal is narrower than that.
pub fn build_overlay_lines(choices: &[Choice], max_width: usize) -> Vec<String> {
    let items: Vec<String> = choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            if i < MAX_KEYED_CHOICES {
                format!(" [{}] {}", i + 1, choice.label)
            } else {
                format!("     {}", choice.label)
            }
        })
        .collect();

    let widest = items.iter().map(|s| s.width()).max().unwrap_or(0);
    let inner = (widest + 2)
        .max(MIN_INNER_WIDTH)
        .min(max_width.saturating_sub(2).max(1));

    let mut lines = Vec::with_capacity(items.len() + 6);
    lines.push(format!("╔{}╗", "═".repeat(inner)));
    lines.push(boxed(&center(TITLE, inner), inner));
    lines.push(format!("╟{}╢", "─".repeat(inner)));
    if items.is_empty() {
        lines.push(boxed(" (no choices)", inner));
    }
    for item in &items {
        lines.push(boxed(item, inner));
    }
    lines.push(format!("╟{}╢", "─".repeat(inner)));
    lines.push(boxed(&center(FOOTER, inner), inner));
    lines.push(format!("╚{}╝", "═".repeat(inner)));
    lines
}

fn center(text: &str, inner: usize) -> String {
    let pad = inner.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn boxed(text: &str, inner: usize) -> String {
    let mut content = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > inner {
            break;
        }
        content.push(ch);
        used += w;
    }
    format!("║{}{}║", content, " ".repeat(inner - used))
}

/// Render the overlay centered in the screen area above the status rows.
pub fn render_overlay(
    stdout: &mut io::Stdout,
    width: u16,
    screen_rows: u16,
    choices: &[Choice],
) -> Result<()> {
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    let lines = build_overlay_lines(choices, width as usize);
    let box_width = lines.first().map(|l| l.width()).unwrap_or(0);
    let col = (width as usize).saturating_sub(box_width) / 2;
    let start_row = (screen_rows as usize).saturating_sub(lines.len()) / 2;

    let mut output = String::new();
    for (i, line) in lines.iter().enumerate() {
        let row = start_row + i;
        if row >= screen_rows as usize {
            break;
        }
        output.push_str(&format!("\x1b[{};{}H{}{}{}", row + 1, col + 1, YELLOW, line, RESET));
    }
    write!(stdout, "{}", output)?;
    Ok(())
}
