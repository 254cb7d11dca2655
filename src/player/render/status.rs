//! Title and status bar rendering for the demo player.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::state::Phase;
use crate::tui::theme::Theme;
use crate::tui::ui::build_footer_spans;

/// Window title shown next to the traffic-light dots.
pub const WINDOW_TITLE: &str = "demo@devcli:~/workspace";

/// Key hints shown in the status bar.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("space", "pause"),
    ("r", "reset"),
    ("↑↓", "scroll"),
    ("?", "help"),
    ("q", "quit"),
];

/// Playback indicator: the icon of the action the play/pause key performs.
pub fn playback_indicator(is_playing: bool) -> &'static str {
    if is_playing {
        "⏸ Pause"
    } else {
        "▶ Play"
    }
}

/// Build the title bar: three dots, window title, playback indicator.
pub fn title_line(width: u16, is_playing: bool, theme: &Theme) -> Line<'static> {
    let indicator = playback_indicator(is_playing);
    // dots (6) + two spaces + title + indicator + trailing space
    let used = 8 + WINDOW_TITLE.len() + indicator.chars().count() + 1;
    let gap = (width as usize).saturating_sub(used);

    Line::from(vec![
        Span::styled(" ● ", Style::default().fg(theme.error)),
        Span::styled("● ", Style::default().fg(theme.prompt)),
        Span::styled("● ", Style::default().fg(theme.accent)),
        Span::raw(" "),
        Span::styled(WINDOW_TITLE, theme.text_secondary_style()),
        Span::raw(" ".repeat(gap)),
        Span::styled(indicator, theme.accent_style()),
        Span::raw(" "),
    ])
}

/// Build the status bar: state, speed, phase, then key hints.
pub fn status_line(is_playing: bool, speed: f64, phase: Phase, theme: &Theme) -> Line<'static> {
    let state = if is_playing { "▶" } else { "⏸" };
    let mut spans = vec![
        Span::styled(format!(" {}  ", state), theme.text_style()),
        Span::styled("spd:", theme.text_secondary_style()),
        Span::styled(format!("{:.1}x ", speed), theme.text_style()),
        Span::styled(format!("{} ", phase.label()), theme.text_secondary_style()),
        Span::styled("│ ", theme.text_secondary_style()),
    ];
    let hints: Vec<(&str, &str)> = KEY_HINTS
        .iter()
        .map(|&(key, desc)| {
            if key == "space" && !is_playing {
                (key, "play")
            } else {
                (key, desc)
            }
        })
        .collect();
    spans.extend(build_footer_spans(&hints, theme));
    Line::from(spans)
}

pub fn render_title(frame: &mut Frame, area: Rect, is_playing: bool, theme: &Theme) {
    frame.render_widget(Paragraph::new(title_line(area.width, is_playing, theme)), area);
}

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    is_playing: bool,
    speed: f64,
    phase: Phase,
    theme: &Theme,
) {
    frame.render_widget(Paragraph::new(status_line(is_playing, speed, phase, theme)), area);
}
