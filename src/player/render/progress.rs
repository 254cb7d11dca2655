//! Progress bar rendering for the demo player.
//!
//! Shows which script entry is playing, with a marker at every entry
//! boundary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Theme;

/// Build the progress bar character array.
///
/// The bar is filled to `current / total`. Entry boundaries are marked
/// with `◆` and the playhead with `⏺` (the playhead wins over a marker).
///
/// # Returns
/// A tuple of (bar_chars, filled_count).
pub fn build_progress_bar_chars(bar_width: usize, current: usize, total: usize) -> (Vec<char>, usize) {
    let progress = if total > 0 {
        (current as f64 / total as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    for boundary in 1..total {
        let pos = boundary * bar_width / total;
        if pos < bar_width {
            bar[pos] = '◆';
        }
    }

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Format the `current / total` counter.
pub fn format_counter(current: usize, total: usize) -> String {
    format!("{} / {}", current, total)
}

/// Render the label row and bar row.
pub fn render_progress(frame: &mut Frame, area: Rect, current: usize, total: usize, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let counter = format_counter(current, total);
    let label = "Demo Progress";
    let gap = (area.width as usize).saturating_sub(label.len() + counter.len() + 2);
    let label_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(label, theme.text_secondary_style()),
        Span::raw(" ".repeat(gap)),
        Span::styled(counter, theme.text_secondary_style()),
    ]);
    frame.render_widget(Paragraph::new(label_line), rows[0]);

    let bar_width = (area.width as usize).saturating_sub(2);
    let (bar, filled) = build_progress_bar_chars(bar_width, current, total);
    frame.render_widget(Paragraph::new(bar_line(&bar, filled, theme)), rows[1]);
}

fn bar_line(bar: &[char], filled: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(bar.len() + 1);
    spans.push(Span::raw(" "));
    for (i, &c) in bar.iter().enumerate() {
        let span = if c == '◆' {
            Span::styled("◆", Style::default().fg(theme.prompt))
        } else if i < filled {
            Span::styled("━", theme.accent_style())
        } else if i == filled {
            Span::styled(c.to_string(), theme.text_style())
        } else {
            Span::styled(c.to_string(), theme.text_secondary_style())
        };
        spans.push(span);
    }
    Line::from(spans)
}
