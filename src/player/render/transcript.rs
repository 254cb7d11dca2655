//! Transcript rendering for the demo player.
//!
//! The body shows the banner, every revealed line styled by category and,
//! last, the live input line.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::player::classify::classify_line;
use crate::player::sequencer::Sequencer;
use crate::player::state::Phase;
use crate::tui::theme::Theme;

/// Lines shown above the transcript.
pub const BANNER: &[&str] = &[
    "DevCLI Interactive Demo",
    "Type 'help' for available commands or watch the demo.",
    "",
];

/// Block cursor shown at the prompt.
pub const CURSOR: &str = "█";

/// Build all body lines: banner, revealed transcript, live input line.
pub fn transcript_lines(sequencer: &Sequencer, theme: &Theme, show_banner: bool) -> Vec<Line<'static>> {
    let revealed = &sequencer.state().revealed_lines;
    let banner_len = if show_banner { BANNER.len() } else { 0 };
    let mut lines = Vec::with_capacity(banner_len + revealed.len() + 1);

    if show_banner {
        lines.extend(
            BANNER
                .iter()
                .map(|text| Line::styled(text.to_string(), theme.text_secondary_style())),
        );
    }

    lines.extend(
        revealed
            .iter()
            .map(|text| Line::styled(text.clone(), theme.category_style(classify_line(text)))),
    );

    lines.push(live_line(sequencer, theme));
    lines
}

/// Number of body lines [`transcript_lines`] produces.
pub fn transcript_len(sequencer: &Sequencer, show_banner: bool) -> usize {
    let banner_len = if show_banner { BANNER.len() } else { 0 };
    banner_len + sequencer.state().revealed_lines.len() + 1
}

/// The input line under the transcript.
///
/// While typing or settling it shows the typed prefix (with a cursor only
/// while typing); otherwise an idle prompt with a cursor.
pub fn live_line(sequencer: &Sequencer, theme: &Theme) -> Line<'static> {
    let state = sequencer.state();
    let prompt = Span::styled("$ ", theme.accent_style());
    let cursor = Span::styled(CURSOR, theme.accent_style());

    let shows_input = matches!(sequencer.phase(), Phase::Typing | Phase::Settling)
        && (state.is_typing || !state.typed_prefix.is_empty());

    if !shows_input {
        return Line::from(vec![prompt, cursor]);
    }

    let mut spans = vec![prompt, Span::styled(state.typed_prefix.clone(), theme.text_style())];
    if state.is_typing {
        spans.push(cursor);
    }
    Line::from(spans)
}

/// Render the transcript body inside a bordered block, starting at `offset`.
pub fn render_transcript(
    frame: &mut Frame,
    area: Rect,
    lines: &[Line<'static>],
    offset: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style());
    let rows = area.height.saturating_sub(2) as usize;
    let start = offset.min(lines.len());
    let end = (start + rows).min(lines.len());
    let visible: Vec<Line<'static>> = lines[start..end].to_vec();
    frame.render_widget(Paragraph::new(visible).block(block), area);
}
