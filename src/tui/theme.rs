//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the player) and ANSI escape codes
//! (for plain CLI output).

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::player::LineCategory;

/// Named theme presets selectable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Green-on-dark terminal palette of the DevCLI site
    #[default]
    Terminal,
    /// Plain white text with yellow accents
    Classic,
    /// Cyan/blue palette
    Ocean,
}

/// Theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (plain transcript lines)
    pub text_primary: Color,
    /// Secondary/dimmed text color (banner, hints, chrome)
    pub text_secondary: Color,
    /// Accent color: prompt `$`, cursor, progress fill
    pub accent: Color,
    /// Interactive prompts and the selected list item
    pub prompt: Color,
    /// Check-marked steps
    pub success: Color,
    /// AI assistant output
    pub assistant: Color,
    /// Runtime status rows
    pub runtime: Color,
    /// Path/project rows
    pub path: Color,
    /// Error color
    pub error: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Theme {
    /// Build the preset for a theme name.
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Terminal => Self::terminal(),
            ThemeName::Classic => Self::classic(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    /// DevCLI terminal palette - light gray text with green accents.
    pub fn terminal() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            prompt: Color::Yellow,
            success: Color::LightGreen,
            assistant: Color::Magenta,
            runtime: Color::Cyan,
            path: Color::Blue,
            error: Color::Red,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            prompt: Color::Yellow,
            success: Color::Green,
            assistant: Color::LightMagenta,
            runtime: Color::White,
            path: Color::White,
            error: Color::Red,
            background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            prompt: Color::LightYellow,
            success: Color::LightGreen,
            assistant: Color::LightMagenta,
            runtime: Color::LightCyan,
            path: Color::LightBlue,
            error: Color::Red,
            background: Color::Reset,
        }
    }

    /// Foreground color for a transcript line category.
    pub fn category_color(&self, category: LineCategory) -> Color {
        match category {
            LineCategory::CommandEcho => self.accent,
            LineCategory::Prompt => self.prompt,
            LineCategory::Success => self.success,
            LineCategory::Assistant => self.assistant,
            LineCategory::RuntimeStatus => self.runtime,
            LineCategory::Path => self.path,
            LineCategory::Plain => self.text_primary,
        }
    }

    // Style helpers

    /// Style for a transcript line category.
    pub fn category_style(&self, category: LineCategory) -> Style {
        Style::default().fg(self.category_color(category))
    }

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style filling the player background.
    pub fn background_style(&self) -> Style {
        Style::default().bg(self.background)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format a transcript line with its category color.
    pub fn category_text(&self, category: LineCategory, text: &str) -> String {
        paint(self.category_color(category), text)
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

static CURRENT_THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme used by [`current_theme`]. Only the first call wins.
pub fn set_theme(name: ThemeName) {
    let _ = CURRENT_THEME.set(Theme::named(name));
}

/// The active theme (default preset until [`set_theme`] is called).
pub fn current_theme() -> Theme {
    CURRENT_THEME.get().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_terminal() {
        let theme = Theme::default();
        assert_eq!(theme.text_primary, Color::Gray);
        assert_eq!(theme.accent, Color::Green);
    }

    #[test]
    fn named_presets() {
        assert_eq!(Theme::named(ThemeName::Classic).text_primary, Color::White);
        assert_eq!(Theme::named(ThemeName::Ocean).text_primary, Color::Cyan);
        assert_eq!(Theme::named(ThemeName::Terminal).path, Color::Blue);
    }

    #[test]
    fn category_colors_follow_terminal_palette() {
        let theme = Theme::terminal();
        assert_eq!(theme.category_color(LineCategory::CommandEcho), Color::Green);
        assert_eq!(theme.category_color(LineCategory::Prompt), Color::Yellow);
        assert_eq!(theme.category_color(LineCategory::Success), Color::LightGreen);
        assert_eq!(theme.category_color(LineCategory::Assistant), Color::Magenta);
        assert_eq!(theme.category_color(LineCategory::RuntimeStatus), Color::Cyan);
        assert_eq!(theme.category_color(LineCategory::Path), Color::Blue);
        assert_eq!(theme.category_color(LineCategory::Plain), Color::Gray);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::terminal();
        assert_eq!(theme.text_style().fg, Some(Color::Gray));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::Green));
        assert_eq!(
            theme.category_style(LineCategory::Assistant).fg,
            Some(Color::Magenta)
        );
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::terminal();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[32m"));
        assert!(accent.ends_with("\x1b[0m"));
        assert!(accent.contains("test"));

        let path = theme.category_text(LineCategory::Path, "  📁 dir");
        assert!(path.starts_with("\x1b[34m"));
    }

    #[test]
    fn theme_name_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: ThemeName,
        }
        let parsed: Wrapper = toml::from_str("theme = \"ocean\"").unwrap();
        assert_eq!(parsed.theme, ThemeName::Ocean);
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Reset), "\x1b[0m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "");
    }
}
