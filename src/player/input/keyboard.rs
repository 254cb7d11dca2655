//! Keyboard input handling for the demo player.
//!
//! Handles playback controls, transcript scrolling and the help overlay.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::sequencer::Sequencer;
use crate::player::state::{InputResult, ViewState};

/// Handle a keyboard event.
///
/// # Arguments
/// * `key` - The key event
/// * `sequencer` - The playback sequencer (for play/pause/reset/speed)
/// * `view` - Front-end view state (help overlay, scrolling)
/// * `now` - Current time on the sequencer's clock
/// * `total_lines` - Number of lines in the transcript body
pub fn handle_key_event(
    key: KeyEvent,
    sequencer: &mut Sequencer,
    view: &mut ViewState,
    now: Duration,
    total_lines: usize,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if view.show_help {
        view.show_help = false;
        view.needs_render = true;
        return InputResult::Continue;
    }

    let page = view.body_rows().max(1);

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Help ===
        KeyCode::Char('?') => {
            view.toggle_help();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            sequencer.toggle(now);
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            sequencer.reset(now);
            view.follow_bottom();
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            sequencer.speed_up();
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            sequencer.speed_down();
            view.needs_render = true;
            InputResult::Continue
        }

        // === Scrolling ===
        KeyCode::Up | KeyCode::Char('k') => {
            view.scroll_up(1, total_lines);
            InputResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view.scroll_down(1, total_lines);
            InputResult::Continue
        }
        KeyCode::PageUp => {
            view.scroll_up(page, total_lines);
            InputResult::Continue
        }
        KeyCode::PageDown => {
            view.scroll_down(page, total_lines);
            InputResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            view.scroll_to_top();
            InputResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            view.follow_bottom();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
