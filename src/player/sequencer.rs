//! Terminal playback sequencer
//!
//! Replays a [`Script`] as a loop of five stages per entry:
//!
//! ```text
//! Typing -> Settling -> (reveal) -> Holding -> Typing (next entry)
//! ```
//!
//! The sequencer is driven by a logical clock: callers pass `now` (time
//! since the sequencer's epoch) and call [`Sequencer::tick`] whenever the
//! pending step may be due. Exactly one step is pending at a time and it
//! lives in a [`Timeline`] slot, so pausing or resetting drops it for good.
//!
//! Resuming after a pause restarts the pending step with its full delay:
//! the current character tick while typing, the whole settle delay while
//! settling, the whole hold while holding. Nothing typed or revealed is
//! repeated or skipped.

use std::time::Duration;

use tracing::{debug, info};

use crate::player::state::{Phase, PlaybackState};
use crate::player::timer::Timeline;
use crate::script::{Script, ScriptEntry};

/// Slowest playback speed multiplier.
pub const MIN_SPEED: f64 = 0.25;
/// Fastest playback speed multiplier.
pub const MAX_SPEED: f64 = 4.0;
const SPEED_STEP: f64 = 1.5;
/// Shortest delay between two steps, so a zero-delay script cannot spin.
const MIN_STEP: Duration = Duration::from_millis(1);

/// Timing knobs shared by every entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    /// Delay before each typed character
    pub typing_interval: Duration,
    /// Idle time after output is revealed
    pub hold: Duration,
    /// Playback speed multiplier (1.0 = normal)
    pub speed: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            typing_interval: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
            speed: 1.0,
        }
    }
}

impl Pacing {
    /// Apply the speed multiplier to a delay, rounded to the nanosecond.
    ///
    /// Results saturate at `u64::MAX` nanoseconds (about 584 years).
    /// Script files cap settle delays well below that.
    pub fn scaled(&self, delay: Duration) -> Duration {
        let speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        Duration::from_nanos((delay.as_nanos() as f64 / speed).round() as u64)
    }
}

/// A state change produced by a fired step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// One more character of the command was typed
    Typed(char),
    /// The last character was typed; settling begins. Empty commands
    /// never type, so they skip this step.
    TypingDone,
    /// Command echo and output were appended to the transcript
    Revealed { lines: usize },
    /// Moved to the entry at `index`
    Advanced { index: usize },
}

/// Deterministic, cancellable, resumable replay of a script.
#[derive(Debug)]
pub struct Sequencer {
    script: Script,
    pacing: Pacing,
    state: PlaybackState,
    phase: Phase,
    timeline: Timeline,
}

impl Sequencer {
    /// Create a stopped sequencer positioned at the first entry.
    pub fn new(script: Script, pacing: Pacing) -> Self {
        let mut sequencer = Self {
            script,
            pacing,
            state: PlaybackState::new(),
            phase: Phase::Idle,
            timeline: Timeline::new(),
        };
        if !sequencer.script.is_empty() {
            sequencer.enter_entry();
        }
        sequencer
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// The entry currently being played, if the script is not empty.
    pub fn current_entry(&self) -> Option<&ScriptEntry> {
        self.script.get(self.state.script_index)
    }

    /// Progress as (`script_index + 1`, script length); `(0, 0)` when empty.
    pub fn progress(&self) -> (usize, usize) {
        if self.script.is_empty() {
            (0, 0)
        } else {
            (self.state.script_index + 1, self.script.len())
        }
    }

    /// Time until the pending step is due, or `None` when nothing is pending.
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        self.timeline.time_until(now)
    }

    /// Uninterrupted duration of one cycle of entry `index` at the current pacing.
    pub fn cycle_duration(&self, index: usize) -> Duration {
        match self.script.get(index) {
            Some(entry) => {
                self.step_delay(self.pacing.typing_interval) * entry.command_len() as u32
                    + self.step_delay(Duration::from_millis(entry.post_typing_delay_ms))
                    + self.step_delay(self.pacing.hold)
            }
            None => Duration::ZERO,
        }
    }

    /// Uninterrupted duration of one full pass over the script.
    pub fn loop_duration(&self) -> Duration {
        (0..self.script.len()).map(|i| self.cycle_duration(i)).sum()
    }

    /// Begin or resume playback from the current point.
    ///
    /// No-op when already playing or when the script is empty.
    pub fn start(&mut self, now: Duration) {
        if self.state.is_playing || self.phase == Phase::Idle {
            return;
        }
        self.state.is_playing = true;
        info!(index = self.state.script_index, phase = ?self.phase, "playback started");
        self.arm_current_phase(now);
    }

    /// Stop playback. The pending step is cancelled, so no state changes
    /// until [`start`](Self::start) is called again.
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.state.is_playing = false;
        self.timeline.cancel();
        info!(index = self.state.script_index, phase = ?self.phase, "playback paused");
    }

    /// Pause when playing, resume when paused.
    pub fn toggle(&mut self, now: Duration) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Return to the first entry with an empty transcript and play.
    pub fn reset(&mut self, now: Duration) {
        self.timeline.cancel();
        self.state.script_index = 0;
        self.state.revealed_lines.clear();
        self.state.typed_prefix.clear();
        self.state.is_typing = false;
        if self.script.is_empty() {
            self.phase = Phase::Idle;
            self.state.is_playing = true;
            return;
        }
        self.state.is_playing = true;
        info!("playback reset");
        self.begin_entry(now);
    }

    /// Change the speed multiplier. Applies from the next scheduled step.
    pub fn set_speed(&mut self, speed: f64) {
        self.pacing.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn speed_up(&mut self) {
        self.set_speed(self.pacing.speed * SPEED_STEP);
    }

    pub fn speed_down(&mut self) {
        self.set_speed(self.pacing.speed / SPEED_STEP);
    }

    /// Fire every step due at `now`, in order.
    pub fn tick(&mut self, now: Duration) -> Vec<Step> {
        let mut steps = Vec::new();
        while let Some(expired) = self.timeline.take_expired(now) {
            self.fire(expired.due, &mut steps);
        }
        steps
    }

    /// Run one step, scheduling the following one relative to `at`.
    fn fire(&mut self, at: Duration, steps: &mut Vec<Step>) {
        match self.phase {
            Phase::Typing => self.type_next_char(at, steps),
            Phase::Settling => steps.push(self.reveal(at)),
            Phase::Holding => steps.push(self.advance(at)),
            // Idle never arms the timeline
            Phase::Idle => {}
        }
    }

    /// Type one character; the last one also ends typing.
    fn type_next_char(&mut self, at: Duration, steps: &mut Vec<Step>) {
        let typed = self.state.typed_len();
        if let Some(c) = self
            .current_entry()
            .and_then(|entry| entry.command.chars().nth(typed))
        {
            self.state.typed_prefix.push(c);
            steps.push(Step::Typed(c));
        }

        if self.state.typed_len() >= self.current_len() {
            self.finish_typing(at);
            steps.push(Step::TypingDone);
        } else {
            self.schedule(at, self.pacing.typing_interval);
        }
    }

    fn finish_typing(&mut self, at: Duration) {
        self.state.is_typing = false;
        self.phase = Phase::Settling;
        self.schedule(at, self.settle_delay());
    }

    fn reveal(&mut self, at: Duration) -> Step {
        let lines: Vec<String> = match self.current_entry() {
            Some(entry) => entry.reveal_lines().collect(),
            None => Vec::new(),
        };
        let count = lines.len();
        self.state.revealed_lines.extend(lines);
        self.phase = Phase::Holding;
        self.schedule(at, self.pacing.hold);
        debug!(index = self.state.script_index, lines = count, "revealed output");
        Step::Revealed { lines: count }
    }

    fn advance(&mut self, at: Duration) -> Step {
        self.state.script_index = (self.state.script_index + 1) % self.script.len();
        self.state.typed_prefix.clear();
        debug!(index = self.state.script_index, "advanced to next entry");
        self.begin_entry(at);
        Step::Advanced {
            index: self.state.script_index,
        }
    }

    /// Start the cycle of the current entry and arm its first step.
    fn begin_entry(&mut self, at: Duration) {
        self.enter_entry();
        self.arm_current_phase(at);
    }

    /// Set the opening phase of the current entry. Empty commands have
    /// nothing to type and go straight to settling.
    fn enter_entry(&mut self) {
        if self.current_len() == 0 {
            self.state.is_typing = false;
            self.phase = Phase::Settling;
        } else {
            self.state.is_typing = true;
            self.phase = Phase::Typing;
        }
    }

    /// Re-arm the pending step of the current phase with its full delay.
    fn arm_current_phase(&mut self, now: Duration) {
        let delay = match self.phase {
            Phase::Typing => self.pacing.typing_interval,
            Phase::Settling => self.settle_delay(),
            Phase::Holding => self.pacing.hold,
            Phase::Idle => return,
        };
        self.schedule(now, delay);
    }

    fn schedule(&mut self, from: Duration, delay: Duration) {
        self.timeline.schedule(from, self.step_delay(delay));
    }

    fn step_delay(&self, delay: Duration) -> Duration {
        self.pacing.scaled(delay).max(MIN_STEP)
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(
            self.current_entry()
                .map(|entry| entry.post_typing_delay_ms)
                .unwrap_or(0),
        )
    }

    fn current_len(&self) -> usize {
        self.current_entry().map(ScriptEntry::command_len).unwrap_or(0)
    }
}
