//! Tracing setup
//!
//! Plain commands log to stderr. The full-screen player owns the terminal,
//! so while it runs logs go to a file in the cache directory instead.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `debug` or
/// `devcli_demo::player=trace`. Overrides `-v`.
pub const LOG_ENV: &str = "DEVCLI_DEMO_LOG";
const LOG_FILE: &str = "player.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// File in the cache directory; nothing is written unless `-v` or
    /// the env filter asks for it.
    File,
}

/// Level name for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_directive() -> Option<String> {
    std::env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty())
}

fn build_filter(verbosity: u8) -> EnvFilter {
    env_directive()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for(verbosity)))
}

/// Path of the player log file.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("devcli-demo").join(LOG_FILE))
}

/// Install the global subscriber. Returns the log file path when logging
/// to a file.
pub fn init(verbosity: u8, target: LogTarget) -> Result<Option<PathBuf>> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(build_filter(verbosity))
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;
            Ok(None)
        }
        LogTarget::File => {
            if verbosity == 0 && env_directive().is_none() {
                return Ok(None);
            }
            let Some(path) = log_file_path() else {
                return Ok(None);
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(Mutex::new(file))
                .with_env_filter(build_filter(verbosity))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;
            Ok(Some(path))
        }
    }
}
