//! Help overlay rendering for the demo player.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;
use crate::tui::ui::centered_box;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "╔═══════════════════════════════════════════╗",
    "║          DevCLI Demo Player Help          ║",
    "╠═══════════════════════════════════════════╣",
    "║                                           ║",
    "║  Playback                                 ║",
    "║    Space/p    Pause / Resume              ║",
    "║    r          Restart from first command  ║",
    "║    +/-        Speed up / down             ║",
    "║                                           ║",
    "║  Transcript                               ║",
    "║    Up/Down    Scroll one line             ║",
    "║    PgUp/PgDn  Scroll one page             ║",
    "║    Home       Jump to top                 ║",
    "║    End        Follow latest output        ║",
    "║                                           ║",
    "║  General                                  ║",
    "║    ?          Show this help              ║",
    "║    q/Esc      Quit player                 ║",
    "║                                           ║",
    "║         Press any key to close            ║",
    "╚═══════════════════════════════════════════╝",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: u16 = 45;

/// Area of the help box, centered in `area`.
pub fn help_area(area: Rect) -> Rect {
    centered_box(HELP_BOX_WIDTH, HELP_LINES.len() as u16, area)
}

/// Render the help overlay on top of the player.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = help_area(area);
    let lines: Vec<Line<'static>> = HELP_LINES
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 1 {
                theme.accent_bold_style()
            } else {
                theme.accent_style()
            };
            Line::styled(*line, style)
        })
        .collect();
    frame.render_widget(Clear, help);
    frame.render_widget(Paragraph::new(lines), help);
}
