//! Subcommand handlers for the devcli-demo binary.

pub mod completions;
pub mod config;
pub mod install;
pub mod play;
pub mod reference;
pub mod transcript;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;

use devcli_demo::tui::{current_theme, set_theme};
use devcli_demo::Config;

/// Load the config (from `path` or the default location) and install its
/// theme for colored output.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    set_theme(config.ui.theme);
    Ok(config)
}

/// Whether stdout is a terminal (colors and box drawing are enabled).
pub fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Terminal width for plain output, capped for readability.
pub fn output_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
        .clamp(20, 100)
}

/// Copyright line printed under reference output.
pub fn copyright_line() -> String {
    format!("© {} DevCLI.", chrono::Local::now().year())
}

/// Paint with `paint` only when `colored`.
pub fn styled(colored: bool, text: &str, paint: impl Fn(&str) -> String) -> String {
    if colored {
        paint(text)
    } else {
        text.to_string()
    }
}

/// Print the horizontal rule and copyright footer.
pub fn print_footer() {
    let theme = current_theme();
    let colored = stdout_is_tty();
    println!("{}", styled(colored, &"─".repeat(output_width()), |t| theme.secondary_text(t)));
    println!("{}", styled(colored, &copyright_line(), |t| theme.secondary_text(t)));
}
