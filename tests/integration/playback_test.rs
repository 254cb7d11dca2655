//! Playback tests through the public library API.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use devcli_demo::player::{
    run_loop, Clock, EventReader, Pacing, Phase, PlayerOptions, Sequencer, Step,
};
use devcli_demo::script::{devcli_demo, Script};
use ratatui::{backend::TestBackend, Terminal};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Sequencer over the built-in script
// ============================================================================

#[test]
fn builtin_loop_reveals_every_entry_then_wraps() {
    let script = devcli_demo();
    let expected = script.one_pass();
    let mut seq = Sequencer::new(script, Pacing::default());
    seq.start(Duration::ZERO);

    let steps = seq.tick(seq.loop_duration());
    let revealed = steps
        .iter()
        .filter(|s| matches!(s, Step::Revealed { .. }))
        .count();
    assert_eq!(revealed, 5);
    assert_eq!(steps.last(), Some(&Step::Advanced { index: 0 }));
    assert_eq!(seq.state().revealed_lines, expected);
    assert_eq!(seq.progress(), (1, 5));
}

#[test]
fn many_small_ticks_match_one_big_tick() {
    let mut stepped = Sequencer::new(devcli_demo(), Pacing::default());
    let mut jumped = Sequencer::new(devcli_demo(), Pacing::default());
    stepped.start(Duration::ZERO);
    jumped.start(Duration::ZERO);

    let end = ms(9_000);
    let mut now = Duration::ZERO;
    while now < end {
        now += ms(7);
        stepped.tick(now);
    }
    jumped.tick(now);
    assert_eq!(stepped.state(), jumped.state());
}

#[test]
fn pause_and_resume_never_duplicates_output() {
    let script = devcli_demo();
    let expected = script.one_pass();
    let mut seq = Sequencer::new(script, Pacing::default());
    seq.start(Duration::ZERO);

    // Pause repeatedly at awkward moments, resuming a while later
    let mut now = Duration::ZERO;
    for pause_at in [ms(120), ms(600), ms(3_000), ms(4_100)] {
        now += pause_at;
        seq.tick(now);
        seq.pause();
        let frozen = seq.state().clone();
        now += ms(10_000);
        assert!(seq.tick(now).is_empty());
        assert_eq!(seq.state(), &frozen);
        seq.start(now);
    }

    // Play out the rest of the pass
    while seq.state().revealed_lines.len() < expected.len() {
        now += ms(100);
        seq.tick(now);
    }
    assert_eq!(seq.state().revealed_lines, expected);
}

#[test]
fn reset_mid_pass_starts_clean() {
    let mut seq = Sequencer::new(devcli_demo(), Pacing::default());
    seq.start(Duration::ZERO);
    seq.tick(ms(5_000));
    assert!(!seq.state().revealed_lines.is_empty());

    seq.reset(ms(5_000));
    assert!(seq.state().revealed_lines.is_empty());
    assert_eq!(seq.progress(), (1, 5));
    assert_eq!(seq.phase(), Phase::Typing);

    // The step pending before the reset must not fire
    assert!(seq.tick(ms(5_049)).is_empty());
    assert_eq!(seq.tick(ms(5_050)), vec![Step::Typed('d')]);
}

#[test]
fn loaded_script_plays_like_builtin_entries() {
    let script = Script::parse(
        r#"
        [[entry]]
        command = "devcli serve"
        output = ["✓ Listening on :3000"]
        delay = 0
        "#,
    )
    .unwrap();
    let mut seq = Sequencer::new(script, Pacing::default());
    seq.start(Duration::ZERO);
    seq.tick(ms(12 * 50 + 1));
    assert_eq!(
        seq.state().revealed_lines,
        vec!["$ devcli serve", "✓ Listening on :3000"]
    );
}

// ============================================================================
// Event loop with scripted input
// ============================================================================

struct SharedClock(Rc<Cell<Duration>>);

impl Clock for SharedClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}

struct Keys {
    time: Rc<Cell<Duration>>,
    queue: VecDeque<(Duration, char)>,
}

impl EventReader for Keys {
    fn read_event(&mut self, timeout: Duration) -> anyhow::Result<Option<Event>> {
        let now = self.time.get();
        match self.queue.front() {
            Some(&(at, c)) if at <= now + timeout => {
                self.queue.pop_front();
                self.time.set(at.max(now));
                Ok(Some(Event::Key(KeyEvent::new(
                    KeyCode::Char(c),
                    KeyModifiers::NONE,
                ))))
            }
            _ => {
                self.time.set(now + timeout);
                Ok(None)
            }
        }
    }
}

#[test]
fn event_loop_plays_builtin_script_and_quits() {
    let time = Rc::new(Cell::new(Duration::ZERO));
    let clock = SharedClock(Rc::clone(&time));
    let mut keys = Keys {
        time,
        queue: VecDeque::from([(ms(1_500), '+'), (ms(8_000), 'q')]),
    };
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    let mut seq = Sequencer::new(devcli_demo(), Pacing::default());

    let summary = run_loop(
        &mut terminal,
        &mut seq,
        &mut keys,
        &clock,
        &PlayerOptions::default(),
    )
    .unwrap();

    assert!(summary.commands_shown >= 2);
    assert_eq!(summary.loops_completed, 0);
    assert_eq!(seq.pacing().speed, 1.5);
}
