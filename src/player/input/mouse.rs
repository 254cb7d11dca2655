//! Mouse input handling for the demo player.
//!
//! The wheel scrolls the transcript.

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::player::state::{InputResult, ViewState};

/// Lines scrolled per wheel notch.
const WHEEL_LINES: usize = 3;

/// Handle a mouse event.
pub fn handle_mouse_event(mouse: MouseEvent, view: &mut ViewState, total_lines: usize) -> InputResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => view.scroll_up(WHEEL_LINES, total_lines),
        MouseEventKind::ScrollDown => view.scroll_down(WHEEL_LINES, total_lines),
        _ => {}
    }
    InputResult::Continue
}
