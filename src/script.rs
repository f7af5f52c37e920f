//! Scripted, headless playback.
//!
//! Feeds a list of [`Step`]s through a controller backed by the simulated
//! provider and records what the surface was told after each one. This is
//! what `branchplay simulate` prints, and a convenient way to reproduce a
//! viewer session exactly.
//!
//! Step syntax:
//!
//! | step          | meaning                                        |
//! |---------------|------------------------------------------------|
//! | `24.6`        | provider reports position 24.6s                |
//! | `t=24.6`      | same                                           |
//! | `advance=2.5` | let the clock run 2.5s (reports every tick)    |
//! | `play`        | press the play affordance                      |
//! | `choose=1`    | pick the first choice in the overlay           |
//! | `close`       | close the overlay                              |
//! | `jump=120`    | debug jump to 120s                             |
//! | `fail`        | the provider rejects its next request          |
//! | `pos`         | print the current position                     |
//! | `dump`        | print the trigger table                        |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::player::debug::{current_position, dump_table, jump_to};
use crate::player::{
    Controller, PlaybackProvider, PlayerEvent, Reconciler, SimulatedPlayer, SurfaceCall,
    Transcript,
};
use crate::story::Story;

/// One scripted viewer or provider action.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Report(f64),
    Advance(f64),
    Play,
    Choose(usize),
    Close,
    Jump(f64),
    Fail,
    Position,
    Dump,
}

/// Why a step could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StepParseError {
    #[error("unknown step '{0}'")]
    Unknown(String),

    #[error("step '{step}' needs a number, got '{value}'")]
    BadNumber { step: String, value: String },

    #[error("choices are numbered from 1")]
    ZeroChoice,
}

fn parse_number<T: FromStr>(step: &str, value: &str) -> Result<T, StepParseError> {
    value.trim().parse().map_err(|_| StepParseError::BadNumber {
        step: step.to_string(),
        value: value.to_string(),
    })
}

/// Seconds must be finite; `inf` and `NaN` parse as `f64` but mean nothing here.
fn parse_seconds(step: &str, value: &str) -> Result<f64, StepParseError> {
    let seconds: f64 = parse_number(step, value)?;
    if !seconds.is_finite() {
        return Err(StepParseError::BadNumber {
            step: step.to_string(),
            value: value.to_string(),
        });
    }
    Ok(seconds)
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(t) = s.parse::<f64>() {
            if t.is_finite() {
                return Ok(Self::Report(t));
            }
        }

        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value)),
            None => (s, None),
        };

        match (name, value) {
            ("t" | "time", Some(v)) => Ok(Self::Report(parse_seconds(name, v)?)),
            ("advance", Some(v)) => Ok(Self::Advance(parse_seconds(name, v)?)),
            ("jump", Some(v)) => Ok(Self::Jump(parse_seconds(name, v)?)),
            ("choose", Some(v)) => match parse_number::<usize>(name, v)? {
                0 => Err(StepParseError::ZeroChoice),
                n => Ok(Self::Choose(n - 1)),
            },
            ("play", None) => Ok(Self::Play),
            ("close", None) => Ok(Self::Close),
            ("fail", None) => Ok(Self::Fail),
            ("pos", None) => Ok(Self::Position),
            ("dump", None) => Ok(Self::Dump),
            _ => Err(StepParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report(t) => write!(f, "t={}", t),
            Self::Advance(s) => write!(f, "advance={}", s),
            Self::Play => write!(f, "play"),
            Self::Choose(i) => write!(f, "choose={}", i + 1),
            Self::Close => write!(f, "close"),
            Self::Jump(t) => write!(f, "jump={}", t),
            Self::Fail => write!(f, "fail"),
            Self::Position => write!(f, "pos"),
            Self::Dump => write!(f, "dump"),
        }
    }
}

/// What happened after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: String,
    /// Time of the trigger that fired during this step, if any
    pub fired: Option<f64>,
    /// Surface calls, in order
    pub ui: Vec<String>,
    pub phase: String,
    pub guard: Option<f64>,
    pub overlay_visible: bool,
    pub position: f64,
    /// Text produced by `pos` and `dump`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "> {}", self.step)?;
        if let Some(time) = self.fired {
            writeln!(f, "  fired trigger at {}s", time)?;
        }
        for call in &self.ui {
            writeln!(f, "  {}", call)?;
        }
        if let Some(output) = &self.output {
            for line in output.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        let guard = self
            .guard
            .map(|g| format!("{}s", g))
            .unwrap_or_else(|| "armed".to_string());
        write!(
            f,
            "  [{} pos={}s guard={} overlay={}]",
            self.phase,
            self.position,
            guard,
            if self.overlay_visible { "shown" } else { "hidden" }
        )
    }
}

/// A controller wired to the simulated provider and a transcript surface.
pub type ScriptedPlayer = Controller<SimulatedPlayer, Transcript>;

/// Build a scripted player for `story`.
pub fn scripted_player(story: Story, tolerance: f64, duration: f64) -> ScriptedPlayer {
    Controller::new(
        story,
        Reconciler::new(tolerance),
        SimulatedPlayer::new(duration),
        Transcript::new(),
    )
}

/// Apply one step and report what changed.
pub fn apply_step(player: &mut ScriptedPlayer, step: &Step) -> StepReport {
    player.surface_mut().take_calls();
    let mut output = None;

    match step {
        Step::Report(t) => player.provider_mut().report_position(*t),
        Step::Advance(secs) => {
            let tick = crate::player::DEFAULT_TICK_INTERVAL;
            // The clock stops at the end of the video
            let provider = player.provider();
            let until_end = (provider.duration() - provider.position()).max(0.0);
            let mut remaining = Duration::try_from_secs_f64(secs.clamp(0.0, until_end))
                .unwrap_or(Duration::ZERO);
            while !remaining.is_zero() {
                let slice = remaining.min(tick);
                player.provider_mut().advance(slice);
                remaining -= slice;
                player.pump();
            }
        }
        Step::Play => {
            player.dispatch(PlayerEvent::PlayButton);
        }
        Step::Choose(i) => {
            player.dispatch(PlayerEvent::SelectChoice(*i));
        }
        Step::Close => {
            player.dispatch(PlayerEvent::CloseOverlay);
        }
        Step::Jump(t) => jump_to(player, *t),
        Step::Fail => player.provider_mut().reject_next("scripted failure"),
        Step::Position => output = Some(current_position(player.provider())),
        Step::Dump => output = Some(dump_table(player.story())),
    }
    player.pump();

    let calls = player.surface_mut().take_calls();
    let fired = if calls
        .iter()
        .any(|c| matches!(c, SurfaceCall::RenderChoices(_)))
    {
        player.active_trigger().map(|t| t.time)
    } else {
        None
    };

    let state = player.state();
    StepReport {
        step: step.to_string(),
        fired,
        ui: calls.iter().map(|c| c.to_string()).collect(),
        phase: state.phase.label().to_string(),
        guard: state.last_triggered,
        overlay_visible: state.overlay_visible,
        position: player.provider().position(),
        output,
    }
}

/// Run every step against a fresh player.
pub fn run_script(story: Story, tolerance: f64, duration: f64, steps: &[Step]) -> Vec<StepReport> {
    let mut player = scripted_player(story, tolerance, duration);
    steps.iter().map(|step| apply_step(&mut player, step)).collect()
}
