//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use devcli_demo::cli::ConfigCommands;
use devcli_demo::tui::current_theme;
use devcli_demo::Config;

use super::{load_config, stdout_is_tty, styled};

pub fn handle(command: ConfigCommands, path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Show => handle_show(path),
        ConfigCommands::Path => handle_path(path),
        ConfigCommands::Init => handle_init(path),
    }
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path().context("Failed to locate config file"),
    }
}

/// Show the effective configuration as TOML.
fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let toml_str = config.to_toml()?;
    let theme = current_theme();
    print!("{}", styled(stdout_is_tty(), &toml_str, |t| theme.primary_text(t)));
    Ok(())
}

fn handle_path(path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(path)?.display());
    Ok(())
}

/// Write the default config file.
fn handle_init(path: Option<&Path>) -> Result<()> {
    let path = resolve_path(path)?;
    Config::init_at(&path)?;
    let theme = current_theme();
    println!(
        "{}",
        styled(stdout_is_tty(), &format!("Created {}", path.display()), |t| theme.success_text(t))
    );
    Ok(())
}
