//! Rendering components for the demo player.
//!
//! Screen layout, top to bottom:
//! - title bar (window dots, title, playback indicator)
//! - transcript body (bordered)
//! - progress label and bar
//! - status bar
//!
//! The help overlay is drawn over everything when visible.

mod help;
mod progress;
mod status;
mod transcript;

pub use help::{help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_progress_bar_chars, format_counter, render_progress};
pub use status::{
    playback_indicator, render_status_bar, render_title, status_line, title_line, KEY_HINTS,
    WINDOW_TITLE,
};
pub use transcript::{
    live_line, render_transcript, transcript_len, transcript_lines, BANNER, CURSOR,
};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::player::sequencer::Sequencer;
use crate::player::state::ViewState;
use crate::tui::theme::Theme;

/// Draw the whole player screen.
pub fn draw(frame: &mut Frame, sequencer: &Sequencer, view: &ViewState, theme: &Theme, show_banner: bool) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.background_style()), area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(2),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    let is_playing = sequencer.is_playing();
    render_title(frame, chunks[0], is_playing, theme);

    let lines = transcript_lines(sequencer, theme, show_banner);
    let offset = view.effective_offset(lines.len());
    render_transcript(frame, chunks[1], &lines, offset, theme);

    let (current, total) = sequencer.progress();
    render_progress(frame, chunks[2], current, total, theme);

    render_status_bar(
        frame,
        chunks[3],
        is_playing,
        sequencer.pacing().speed,
        sequencer.phase(),
        theme,
    );

    if view.show_help {
        render_help(frame, area, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::sequencer::Pacing;
    use crate::script::devcli_demo;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn buffer_text(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(sequencer: &Sequencer, view: &ViewState) -> String {
        let backend = TestBackend::new(view.term_cols, view.term_rows);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw(frame, sequencer, view, &Theme::terminal(), true))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn draws_chrome_and_banner() {
        let seq = Sequencer::new(devcli_demo(), Pacing::default());
        let screen = render(&seq, &ViewState::new(80, 24));

        assert!(screen.contains(WINDOW_TITLE));
        assert!(screen.contains("DevCLI Interactive Demo"));
        assert!(screen.contains("Demo Progress"));
        assert!(screen.contains("1 / 5"));
        assert!(screen.contains("q: quit"));
    }

    #[test]
    fn draws_revealed_output() {
        let mut seq = Sequencer::new(devcli_demo(), Pacing::default());
        seq.start(Duration::ZERO);
        seq.tick(seq.cycle_duration(0) - Duration::from_millis(1));

        let screen = render(&seq, &ViewState::new(80, 24));
        assert!(screen.contains("$ devcli --version"));
        assert!(screen.contains("DevCLI v2.4.1 (stable)"));
    }

    #[test]
    fn following_view_shows_latest_lines() {
        let mut seq = Sequencer::new(devcli_demo(), Pacing::default());
        seq.start(Duration::ZERO);
        // Three entries revealed: far more lines than a 16-row screen holds
        let until = seq.cycle_duration(0) + seq.cycle_duration(1) + seq.cycle_duration(2)
            - Duration::from_millis(1);
        seq.tick(until);

        let screen = render(&seq, &ViewState::new(80, 16));
        assert!(screen.contains("manifest.json"));
        assert!(!screen.contains("DevCLI Interactive Demo"));
    }

    #[test]
    fn scrolled_to_top_shows_banner() {
        let mut seq = Sequencer::new(devcli_demo(), Pacing::default());
        seq.start(Duration::ZERO);
        seq.tick(seq.loop_duration() - Duration::from_millis(1));

        let mut view = ViewState::new(80, 16);
        view.scroll_to_top();
        let screen = render(&seq, &view);
        assert!(screen.contains("DevCLI Interactive Demo"));
    }

    #[test]
    fn help_overlay_drawn_when_visible() {
        let seq = Sequencer::new(devcli_demo(), Pacing::default());
        let mut view = ViewState::new(80, 30);
        view.toggle_help();
        let screen = render(&seq, &view);
        assert!(screen.contains("DevCLI Demo Player Help"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let seq = Sequencer::new(devcli_demo(), Pacing::default());
        let _ = render(&seq, &ViewState::new(10, 4));
    }
}
