//! Play command handler

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use devcli_demo::cli::PlayArgs;
use devcli_demo::player::{play_demo, PlayerOptions};
use devcli_demo::script::load_or_builtin;
use devcli_demo::tui::current_theme;
use devcli_demo::{Config, Pacing};

use super::load_config;

/// Merge command-line overrides into the configured pacing.
pub fn resolve_pacing(config: &Config, args: &PlayArgs) -> Pacing {
    let mut pacing = config.pacing();
    if let Some(ms) = args.typing_ms {
        pacing.typing_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = args.hold_ms {
        pacing.hold = Duration::from_millis(ms);
    }
    if let Some(speed) = args.speed {
        pacing.speed = speed;
    }
    pacing
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let script = load_or_builtin(args.source.script.as_deref()).context("Failed to load script")?;
    let options = PlayerOptions {
        pacing: resolve_pacing(&config, args),
        theme: current_theme(),
        show_banner: config.ui.show_banner,
    };

    let summary = play_demo(script, &options)?;
    info!(?summary, "player exited");
    Ok(())
}
