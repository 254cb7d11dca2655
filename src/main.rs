//! devcli-demo - the DevCLI terminal demo
//!
//! Plays the scripted DevCLI session full-screen and prints the DevCLI
//! command reference and install instructions.

mod commands;

use anyhow::Result;
use clap::Parser;

use devcli_demo::cli::{Cli, Commands, PlayArgs};
use devcli_demo::logging::{self, LogTarget};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play(PlayArgs::default()));

    // The player owns the terminal, so its logs must not reach it
    let target = match command {
        Commands::Play(_) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target)?;

    let config_path = cli.config.as_deref();
    match command {
        Commands::Play(args) => commands::play::handle(&args, config_path),
        Commands::Transcript(args) => commands::transcript::handle(&args, config_path),
        Commands::Commands(args) => commands::reference::handle(&args, config_path),
        Commands::Install(args) => commands::install::handle(&args, config_path),
        Commands::Config(cmd) => commands::config::handle(cmd, config_path),
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
