//! branchplay CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use branchplay::cli::{Cli, Commands, ConfigCommands, StoryCommands};
use branchplay::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The interactive player owns the terminal; it only logs to a file.
    match (&cli.log_file, &cli.command) {
        (Some(path), _) => logging::init_file(path)?,
        (None, Commands::Play { .. }) => {}
        (None, _) => logging::init_stderr(),
    }

    match cli.command {
        Commands::Play { story, tolerance } => commands::play::handle(story, tolerance),
        Commands::Simulate {
            story,
            tolerance,
            format,
            steps,
        } => commands::simulate::handle(story, tolerance, format, &steps),
        Commands::Story(StoryCommands::Show { story, format }) => {
            commands::story::handle_show(story, format)
        }
        Commands::Story(StoryCommands::Check { story, tolerance }) => {
            commands::story::handle_check(story, tolerance)
        }
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Config(ConfigCommands::Edit) => commands::config::handle_edit(),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "branchplay",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
