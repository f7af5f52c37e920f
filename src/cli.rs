//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::script::Step;

/// Version string: crate version plus git SHA on dev builds.
pub const VERSION: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(_) => concat!(env!("CARGO_PKG_VERSION"), "-dev"),
    None => env!("CARGO_PKG_VERSION"),
};

/// `--version` output with the build date.
pub const LONG_VERSION: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(_) => concat!(
        env!("CARGO_PKG_VERSION"),
        "-dev (built ",
        env!("BRANCHPLAY_BUILD_DATE"),
        ")"
    ),
    None => concat!(
        env!("CARGO_PKG_VERSION"),
        " (built ",
        env!("BRANCHPLAY_BUILD_DATE"),
        ")"
    ),
};

#[derive(Parser, Debug)]
#[command(
    name = "branchplay",
    version = VERSION,
    long_version = LONG_VERSION,
    about = "Interactive branching-video player",
    long_about = "Plays a story: a video that pauses at authored trigger points and offers \
                  choices that jump playback to other times.\n\n\
                  Without a story file the bundled sample story is used."
)]
pub struct Cli {
    /// Write logs to this file (filter with BRANCHPLAY_LOG, default: warn)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a story interactively in the terminal
    Play {
        /// Story file (.toml or .json)
        story: Option<PathBuf>,

        /// Seconds around a trigger within which it fires
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Run scripted steps through the player and print what happens
    #[command(long_about = "Run scripted steps through the player and print what happens.\n\n\
        Steps: <seconds> or t=<seconds> (position report), advance=<seconds>, play, \
        choose=<n>, close, jump=<seconds>, fail, pos, dump")]
    Simulate {
        /// Story file (.toml or .json)
        #[arg(long)]
        story: Option<PathBuf>,

        /// Seconds around a trigger within which it fires
        #[arg(long)]
        tolerance: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Steps to run, in order
        #[arg(required = true, value_name = "STEP")]
        steps: Vec<Step>,
    },

    /// Inspect story files
    #[command(subcommand)]
    Story(StoryCommands),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum StoryCommands {
    /// Print the trigger table
    Show {
        /// Story file (.toml or .json)
        story: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Lint a story file
    Check {
        /// Story file (.toml or .json)
        story: Option<PathBuf>,

        /// Seconds around a trigger within which it fires
        #[arg(long)]
        tolerance: Option<f64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Open configuration in $EDITOR
    Edit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
