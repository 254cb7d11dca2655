//! Input handling for the demo player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::Duration;

use crossterm::event::Event;

use crate::player::sequencer::Sequencer;
use crate::player::state::{InputResult, ViewState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `sequencer` - The playback sequencer
/// * `view` - Front-end view state
/// * `now` - Current time on the sequencer's clock
/// * `total_lines` - Number of lines in the transcript body
pub fn handle_event(
    event: Event,
    sequencer: &mut Sequencer,
    view: &mut ViewState,
    now: Duration,
    total_lines: usize,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, sequencer, view, now, total_lines),
        Event::Mouse(mouse) => handle_mouse_event(mouse, view, total_lines),
        Event::Resize(new_cols, new_rows) => {
            view.handle_resize(new_cols, new_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
