//! Native terminal player
//!
//! Owns the terminal for the lifetime of a playback session: raw mode,
//! alternate screen and mouse capture on entry, restored on exit or panic.
//! The event loop drives the [`Sequencer`] off a monotonic clock and
//! redraws only when something changed.

use std::io;
use std::panic;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info};

use crate::player::input::handle_event;
use crate::player::render;
use crate::player::sequencer::{Pacing, Sequencer, Step};
use crate::player::state::{InputResult, ViewState};
use crate::script::Script;
use crate::tui::theme::Theme;

/// Longest time the loop waits for input before checking the clock again.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Reads terminal events (injectable for tests).
pub trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader backed by crossterm polling.
pub struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Source of the sequencer's logical time.
pub trait Clock {
    /// Time elapsed since the clock's epoch.
    fn now(&self) -> Duration;
}

/// Wall clock measured from the moment it was created.
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Settings for a playback session.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    pub pacing: Pacing,
    pub theme: Theme,
    pub show_banner: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            theme: Theme::default(),
            show_banner: true,
        }
    }
}

/// What happened during a session, reported after the player exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Number of entries whose output was revealed
    pub commands_shown: usize,
    /// Number of times playback wrapped back to the first entry
    pub loops_completed: usize,
}

/// Play a script full-screen until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_demo(script: Script, options: &PlayerOptions) -> Result<PlaybackSummary> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    // Restore the terminal before the default hook prints the panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_session(script, options);

    let _ = panic::take_hook();
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

    result
}

#[cfg(not(tarpaulin_include))]
fn run_session(script: Script, options: &PlayerOptions) -> Result<PlaybackSummary> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    let mut sequencer = Sequencer::new(script, options.pacing);
    let clock = MonotonicClock::new();
    let result = run_loop(
        &mut terminal,
        &mut sequencer,
        &mut CrosstermEventReader,
        &clock,
        options,
    );

    terminal.show_cursor().context("Failed to restore cursor")?;
    result
}

/// Drive the sequencer and redraw until the user quits.
///
/// Generic over the backend and event source so tests can run it against
/// ratatui's `TestBackend` with scripted input and a virtual clock.
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    sequencer: &mut Sequencer,
    reader: &mut dyn EventReader,
    clock: &dyn Clock,
    options: &PlayerOptions,
) -> Result<PlaybackSummary> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let mut view = ViewState::new(size.width, size.height);
    let mut summary = PlaybackSummary::default();

    sequencer.start(clock.now());
    info!(
        entries = sequencer.script().len(),
        cols = size.width,
        rows = size.height,
        "player started"
    );

    loop {
        let now = clock.now();
        let steps = sequencer.tick(now);
        for step in &steps {
            match step {
                Step::Revealed { .. } => {
                    summary.commands_shown += 1;
                    view.follow_bottom();
                }
                Step::Advanced { index: 0 } => summary.loops_completed += 1,
                _ => {}
            }
        }
        if !steps.is_empty() {
            view.needs_render = true;
        }

        if view.needs_render {
            terminal
                .draw(|frame| {
                    render::draw(frame, sequencer, &view, &options.theme, options.show_banner)
                })
                .context("Failed to draw frame")?;
            view.needs_render = false;
        }

        let timeout = sequencer
            .time_until_next(now)
            .map_or(MAX_POLL, |wait| wait.min(MAX_POLL));

        if let Some(event) = reader.read_event(timeout)? {
            let total_lines = render::transcript_len(sequencer, options.show_banner);
            let result = handle_event(event, sequencer, &mut view, clock.now(), total_lines);
            if result == InputResult::Quit {
                debug!(?summary, "player quit");
                return Ok(summary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptEntry;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Virtual clock shared with the scripted reader.
    struct ManualClock(Rc<Cell<Duration>>);

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            self.0.get()
        }
    }

    /// Delivers each event at its scheduled time, advancing the clock
    /// through poll timeouts in between.
    struct ScriptedReader {
        time: Rc<Cell<Duration>>,
        events: VecDeque<(Duration, Event)>,
    }

    impl EventReader for ScriptedReader {
        fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
            let now = self.time.get();
            match self.events.front() {
                Some((at, _)) if *at <= now + timeout => {
                    self.time.set((*at).max(now));
                    Ok(self.events.pop_front().map(|(_, event)| event))
                }
                _ => {
                    self.time.set(now + timeout);
                    Ok(None)
                }
            }
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn script() -> Script {
        Script::from_entries(vec![ScriptEntry {
            command: "ab".to_string(),
            output: vec!["ok".to_string()],
            post_typing_delay_ms: 100,
        }])
    }

    fn run(events: Vec<(Duration, Event)>) -> (PlaybackSummary, Sequencer, String) {
        let time = Rc::new(Cell::new(Duration::ZERO));
        let clock = ManualClock(Rc::clone(&time));
        let mut reader = ScriptedReader {
            time,
            events: events.into(),
        };
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let mut sequencer = Sequencer::new(script(), Pacing::default());
        let summary = run_loop(
            &mut terminal,
            &mut sequencer,
            &mut reader,
            &clock,
            &PlayerOptions::default(),
        )
        .unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        (summary, sequencer, screen)
    }

    #[test]
    fn plays_until_quit() {
        let (summary, seq, screen) = run(vec![(ms(400), key('q'))]);
        assert_eq!(summary.commands_shown, 1);
        assert_eq!(summary.loops_completed, 0);
        assert_eq!(seq.state().revealed_lines, vec!["$ ab", "ok"]);
        assert!(screen.contains("$ ab"));
        assert!(screen.contains("ok"));
    }

    #[test]
    fn wraps_to_first_entry() {
        // One cycle: 2 chars * 50ms + 100ms settle + 2000ms hold
        let (summary, _, _) = run(vec![(ms(2300), key('q'))]);
        assert_eq!(summary.loops_completed, 1);
        assert_eq!(summary.commands_shown, 1);
    }

    #[test]
    fn pause_stops_progress() {
        let (summary, seq, screen) = run(vec![(ms(10), key(' ')), (ms(5000), key('q'))]);
        assert_eq!(summary.commands_shown, 0);
        assert!(!seq.is_playing());
        assert!(seq.state().revealed_lines.is_empty());
        assert!(screen.contains("▶ Play"));
    }

    #[test]
    fn quits_immediately() {
        let (summary, seq, _) = run(vec![(Duration::ZERO, key('q'))]);
        assert_eq!(summary, PlaybackSummary::default());
        assert!(seq.state().typed_prefix.is_empty());
    }
}
