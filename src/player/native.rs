//! Interactive terminal player.
//!
//! Runs a story against the simulated provider in the terminal: the screen
//! area stands in for the video, the progress bar shows trigger diamonds and
//! the choice overlay pops up at each trigger.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use tracing::info;

use crate::player::controller::Controller;
use crate::player::input::handle_event;
use crate::player::reconciler::Reconciler;
use crate::player::render::{
    build_debug_lines, clear_rows, render_debug_panel, render_help, render_overlay,
    render_progress_bar, render_screen, render_separator_line, render_status_bar, render_title,
};
use crate::player::sim::SimulatedPlayer;
use crate::player::surface::UiSurface;
use crate::player::view::{InputResult, ViewState};
use crate::story::{Choice, Story};

/// How long to wait for input before advancing the clock.
const FRAME: Duration = Duration::from_millis(50);

/// Result of a playback session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Viewer quit the player
    Quit,
    /// Player stopped because of an error
    Error(String),
}

/// Surface that keeps overlay state for the terminal renderer.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    choices: Vec<Choice>,
    overlay_visible: bool,
    play_affordance_visible: bool,
    dirty: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl UiSurface for TerminalSurface {
    fn render_choices(&mut self, choices: &[Choice]) {
        self.choices = choices.to_vec();
        self.dirty = true;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
        self.dirty = true;
    }

    fn set_play_affordance_visible(&mut self, visible: bool) {
        self.play_affordance_visible = visible;
        self.dirty = true;
    }
}

/// Options for an interactive session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub tolerance: f64,
    pub tick_interval: Duration,
    pub duration: f64,
}

/// Play a story interactively in the terminal.
///
/// Sets up raw mode and the alternate screen, runs until the viewer quits,
/// and always restores the terminal.
#[cfg(not(tarpaulin_include))]
pub fn play_story(story: Story, options: &PlayOptions) -> Result<PlaybackResult> {
    let provider =
        SimulatedPlayer::new(options.duration).with_tick_interval(options.tick_interval);
    let mut controller = Controller::new(
        story,
        Reconciler::new(options.tolerance),
        provider,
        TerminalSurface::new(),
    );

    let (cols, rows) = terminal::size()?;
    let mut view = ViewState::new(cols, rows);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = run_loop(&mut stdout, &mut view, &mut controller, options.duration);

    let _ = execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    match result {
        Ok(()) => {
            info!(position = controller.state().current_time, "viewer quit");
            Ok(PlaybackResult::Quit)
        }
        Err(e) => Ok(PlaybackResult::Error(e.to_string())),
    }
}

#[cfg(not(tarpaulin_include))]
fn run_loop(
    stdout: &mut io::Stdout,
    view: &mut ViewState,
    controller: &mut Controller<SimulatedPlayer, TerminalSurface>,
    total_duration: f64,
) -> Result<()> {
    let mut last = Instant::now();

    loop {
        if event::poll(FRAME)? {
            let ev = event::read()?;
            if handle_event(ev, view, controller, total_duration) == InputResult::Quit {
                return Ok(());
            }
        }

        let now = Instant::now();
        controller.provider_mut().advance(now - last);
        last = now;

        let pumped = controller.pump();
        if controller.surface_mut().take_dirty() {
            view.mark_dirty();
        } else if pumped > 0 {
            view.needs_render = true;
        }

        if view.needs_render {
            render(stdout, view, controller, total_duration)?;
            view.needs_render = false;
            view.needs_clear = false;
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn render(
    stdout: &mut io::Stdout,
    view: &ViewState,
    controller: &Controller<SimulatedPlayer, TerminalSurface>,
    total_duration: f64,
) -> Result<()> {
    if view.show_help {
        render_help(stdout, view.term_cols, view.term_rows)?;
        stdout.flush()?;
        return Ok(());
    }

    let state = controller.state();
    let surface = controller.surface();
    let story = controller.story();
    let screen_rows = view.screen_rows();

    if view.needs_clear {
        clear_rows(stdout, 0, view.term_rows)?;
    }
    render_title(stdout, story.display_title())?;

    if view.show_debug {
        let lines = build_debug_lines(controller.provider(), state, story);
        render_debug_panel(stdout, screen_rows, &lines)?;
    } else {
        render_screen(
            stdout,
            view.term_cols,
            screen_rows,
            state.current_time,
            surface.play_affordance_visible,
        )?;
    }

    if surface.overlay_visible {
        render_overlay(stdout, view.term_cols, screen_rows, &surface.choices)?;
    }

    render_separator_line(stdout, view.term_cols, screen_rows)?;
    render_progress_bar(
        stdout,
        view.term_cols,
        view.progress_row(),
        state.current_time,
        total_duration,
        &story.triggers,
    )?;
    render_status_bar(
        stdout,
        view.term_cols,
        view.term_rows.saturating_sub(1),
        state,
        story.len(),
    )?;

    stdout.flush()?;
    Ok(())
}
