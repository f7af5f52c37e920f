//! Story configuration: the author-edited table of trigger points.
//!
//! A story is an ordered list of [`TriggerPoint`]s, each pausing playback at
//! a moment in time and offering one or more [`Choice`]s. The order of the
//! table is significant: when two triggers match the same position, the one
//! listed first wins. Tables are never sorted.
//!
//! Stories are loaded once at startup from TOML or JSON:
//!
//! ```toml
//! title = "The Cave"
//!
//! [[trigger]]
//! time = 25
//! links = [
//!     { label = "GO THROUGH", target = 35 },
//!     { label = "GO AROUND", target = 66 },
//! ]
//! ```
//!
//! No schema validation happens on load. An entry without a `time` loads as
//! an inert trigger that never matches; [`Story::check`] reports such entries
//! on demand.

mod builtin;
mod check;
mod error;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

pub use check::StoryWarning;
pub use error::StoryError;

/// A single labeled branch option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Button text shown in the overlay
    pub label: String,
    /// Seek target in seconds
    pub target: f64,
}

impl Choice {
    pub fn new(label: impl Into<String>, target: f64) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

/// An authored moment at which playback pauses and choices are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerPoint {
    /// Trigger time in seconds. `NaN` when the entry omitted it or left it
    /// `null`, which is also how JSON writes a `NaN` back out.
    #[serde(default = "inert_time", deserialize_with = "time_or_inert")]
    pub time: f64,
    /// Choices in display order
    #[serde(default)]
    pub links: Vec<Choice>,
}

fn inert_time() -> f64 {
    f64::NAN
}

fn time_or_inert<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(inert_time))
}

impl TriggerPoint {
    pub fn new(time: f64, links: Vec<Choice>) -> Self {
        Self { time, links }
    }

    /// Whether this entry can never fire (its time was missing or not a number).
    pub fn is_inert(&self) -> bool {
        self.time.is_nan()
    }
}

/// The trigger table plus optional presentation metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Length of the (simulated) video in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Per-story override of the fire tolerance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(rename = "trigger", alias = "timestamps", alias = "triggers", default)]
    pub triggers: Vec<TriggerPoint>,
}

impl Story {
    pub fn new(triggers: Vec<TriggerPoint>) -> Self {
        Self {
            triggers,
            ..Self::default()
        }
    }

    /// The sample story bundled with the binary.
    pub fn builtin() -> Self {
        builtin::sample_story()
    }

    /// Load a story from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, StoryError> {
        if !path.exists() {
            return Err(StoryError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let content = fs::read_to_string(path)?;
        match extension.as_str() {
            "toml" => Self::from_toml(&content),
            "json" => Self::from_json(&content),
            _ => Err(StoryError::UnsupportedFormat { extension }),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, StoryError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, StoryError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Number of triggers in the table (inert entries included).
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Display name: the title, or a fallback.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled story")
    }

    /// Video length to simulate: the declared duration, or a little past the
    /// furthest time or target referenced by the table.
    pub fn effective_duration(&self) -> f64 {
        if let Some(duration) = self.duration {
            return duration;
        }
        let furthest = self
            .triggers
            .iter()
            .filter(|t| !t.is_inert())
            .flat_map(|t| std::iter::once(t.time).chain(t.links.iter().map(|c| c.target)))
            .fold(0.0f64, f64::max);
        furthest + 30.0
    }

    /// Lint the table. Never modifies it.
    pub fn check(&self, tolerance: f64) -> Vec<StoryWarning> {
        check::check_story(self, tolerance)
    }
}
