//! Terminal view state for the interactive player.
//!
//! Everything here is presentation only: terminal size, which panels are
//! open, and whether a redraw is due. Playback state lives in
//! [`crate::player::state::PlaybackState`].

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the main
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// View state of the terminal player.
#[derive(Debug)]
pub struct ViewState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Whether the debug panel is visible
    pub show_debug: bool,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
    /// True when the whole screen must be cleared before drawing
    pub needs_clear: bool,
}

impl ViewState {
    /// Number of status/chrome lines (separator + progress + status bar)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            show_help: false,
            show_debug: false,
            needs_render: true,
            needs_clear: true,
        }
    }

    /// Rows available above the status lines.
    pub fn screen_rows(&self) -> u16 {
        self.term_rows.saturating_sub(Self::STATUS_LINES)
    }

    /// Row of the progress bar (0-indexed).
    pub fn progress_row(&self) -> u16 {
        self.term_rows.saturating_sub(2)
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.term_cols = cols;
        self.term_rows = rows;
        self.mark_dirty();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.mark_dirty();
    }

    pub fn toggle_debug(&mut self) {
        self.show_debug = !self.show_debug;
        self.mark_dirty();
    }

    /// Request a full redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
        self.needs_clear = true;
    }
}
