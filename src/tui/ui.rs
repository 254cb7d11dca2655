//! UI rendering helpers for TUI
//!
//! Common layout utilities and footer hint spans.

use ratatui::{layout::Rect, style::Style, text::Span};

use super::theme::Theme;

/// Center a box of fixed size inside `area`, shrinking it to fit.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
///
/// Example: `&[("q", "quit"), ("?", "help")]` renders as `"q: quit | ?: help"`.
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
