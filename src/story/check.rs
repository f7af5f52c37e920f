//! On-demand lint for story tables.
//!
//! Loading never validates; this pass is only run by `branchplay story check`
//! and never rewrites the table.

use std::fmt;

use super::Story;

/// A problem found in a story table.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryWarning {
    /// Entry without a usable `time`; it will never fire
    InertTrigger { index: usize },
    /// Trigger time below zero
    NegativeTime { index: usize, time: f64 },
    /// Trigger with nothing to choose; only closing the overlay resumes
    NoChoices { index: usize, time: f64 },
    /// Choice target below zero or past the end of the video
    TargetOutOfRange {
        index: usize,
        label: String,
        target: f64,
    },
    /// Two entries share the same time; only the first can ever fire
    DuplicateTime { first: usize, second: usize, time: f64 },
    /// Two triggers sit inside each other's disarm band, so the guard never
    /// fully clears between them
    OverlappingBands {
        first: usize,
        second: usize,
        gap: f64,
    },
}

impl fmt::Display for StoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InertTrigger { index } => {
                write!(f, "trigger #{} has no time and will never fire", index + 1)
            }
            Self::NegativeTime { index, time } => {
                write!(f, "trigger #{} has negative time {}", index + 1, time)
            }
            Self::NoChoices { index, time } => {
                write!(f, "trigger #{} at {}s has no choices", index + 1, time)
            }
            Self::TargetOutOfRange {
                index,
                label,
                target,
            } => write!(
                f,
                "trigger #{} choice '{}' targets {}s, outside the video",
                index + 1,
                label,
                target
            ),
            Self::DuplicateTime {
                first,
                second,
                time,
            } => write!(
                f,
                "triggers #{} and #{} share time {}s; #{} can never fire",
                first + 1,
                second + 1,
                time,
                second + 1
            ),
            Self::OverlappingBands { first, second, gap } => write!(
                f,
                "triggers #{} and #{} are only {:.2}s apart; their disarm bands overlap",
                first + 1,
                second + 1,
                gap
            ),
        }
    }
}

pub(super) fn check_story(story: &Story, tolerance: f64) -> Vec<StoryWarning> {
    let mut warnings = Vec::new();
    let duration = story.duration;

    for (index, trigger) in story.triggers.iter().enumerate() {
        if trigger.is_inert() {
            warnings.push(StoryWarning::InertTrigger { index });
            continue;
        }
        if trigger.time < 0.0 {
            warnings.push(StoryWarning::NegativeTime {
                index,
                time: trigger.time,
            });
        }
        if trigger.links.is_empty() {
            warnings.push(StoryWarning::NoChoices {
                index,
                time: trigger.time,
            });
        }
        for choice in &trigger.links {
            let past_end = duration.is_some_and(|d| choice.target > d);
            if choice.target < 0.0 || past_end {
                warnings.push(StoryWarning::TargetOutOfRange {
                    index,
                    label: choice.label.clone(),
                    target: choice.target,
                });
            }
        }
    }

    let band = tolerance * 2.0;
    for (first, a) in story.triggers.iter().enumerate() {
        for (offset, b) in story.triggers[first + 1..].iter().enumerate() {
            if a.is_inert() || b.is_inert() {
                continue;
            }
            let second = first + 1 + offset;
            let gap = (a.time - b.time).abs();
            if gap == 0.0 {
                warnings.push(StoryWarning::DuplicateTime {
                    first,
                    second,
                    time: a.time,
                });
            } else if gap < band {
                warnings.push(StoryWarning::OverlappingBands { first, second, gap });
            }
        }
    }

    warnings
}
