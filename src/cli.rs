//! Command-line interface definition
//!
//! Shared by the binary and by `xtask`, which renders man pages from it.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::player::sequencer::{MAX_SPEED, MIN_SPEED};

/// Version string with git commit and build date.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("DEVCLI_DEMO_BUILD_DATE"),
    ")"
);

/// Version string with build date.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("DEVCLI_DEMO_BUILD_DATE"),
    ")"
);

/// DevCLI demo - watch the DevCLI terminal demo and browse its reference
#[derive(Parser, Debug)]
#[command(name = "devcli-demo")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Watch the DevCLI terminal demo and browse the DevCLI command reference")]
#[command(
    long_about = "Replays the scripted DevCLI session in your terminal: commands are typed \
                  character by character and their output appears as if they had run. \
                  Nothing is executed.\n\nRun without a subcommand to start the player."
)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the demo full-screen (default)
    #[command(long_about = "Play the demo full-screen.\n\n\
        Keys: space pause/resume, r restart, +/- speed, arrows scroll, ? help, q quit.")]
    Play(PlayArgs),

    /// Print the transcript the demo produces
    #[command(long_about = "Print the transcript that uninterrupted playback produces.\n\n\
        Lines are colored by kind when stdout is a terminal. Use --json for \
        machine-readable output.")]
    Transcript(TranscriptArgs),

    /// Browse the DevCLI command reference
    Commands(CommandsArgs),

    /// Show how to install DevCLI
    Install(InstallArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Script source shared by commands that play a script.
#[derive(Args, Debug, Clone, Default)]
pub struct ScriptArgs {
    /// Play a TOML script instead of the built-in DevCLI demo
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    #[command(flatten)]
    pub source: ScriptArgs,

    /// Delay before each typed character, in milliseconds
    #[arg(long, value_name = "MS")]
    pub typing_ms: Option<u64>,

    /// Pause after output appears, in milliseconds
    #[arg(long, value_name = "MS")]
    pub hold_ms: Option<u64>,

    /// Playback speed multiplier (0.25 to 4.0)
    #[arg(long, value_name = "X", value_parser = parse_speed)]
    pub speed: Option<f64>,
}

/// Upper bound for `transcript --loops`.
pub const MAX_LOOPS: u32 = 1000;

#[derive(Args, Debug, Clone)]
pub struct TranscriptArgs {
    #[command(flatten)]
    pub source: ScriptArgs,

    /// Number of full loops through the script (1 to 1000)
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LOOPS))
    )]
    pub loops: u32,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommandsArgs {
    /// Show commands whose name or description contains this text
    pub query: Option<String>,

    /// Only show commands in this category (exact match, "All" for every category)
    #[arg(long, short)]
    pub category: Option<String>,

    /// List the categories and exit
    #[arg(long, conflicts_with_all = ["query", "category"])]
    pub categories: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InstallArgs {
    /// Only show this method (curl, wget, brew, go, manual)
    pub method: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default config file (fails if it exists)
    Init,
}

/// Parse and range-check a speed multiplier.
fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(format!(
            "speed must be between {} and {}",
            MIN_SPEED, MAX_SPEED
        ));
    }
    Ok(speed)
}
