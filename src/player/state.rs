//! Player state management
//!
//! Contains the `PlaybackState` owned by the sequencer, the `ViewState`
//! owned by the terminal front end, and shared types used across player
//! modules.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Stage of the per-entry playback cycle.
///
/// Revealing is not a phase: it is the instantaneous transition between
/// `Settling` and `Holding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing to play (empty script)
    #[default]
    Idle,
    /// The command is being typed one character per tick
    Typing,
    /// Command fully typed, waiting before output appears
    Settling,
    /// Output revealed, prompt idle before the next entry
    Holding,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Typing => "typing",
            Phase::Settling => "running",
            Phase::Holding => "waiting",
        }
    }
}

/// Mutable playback state, owned and mutated only by the sequencer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Cursor into the script, wraps modulo script length
    pub script_index: usize,
    /// The part of the current command typed so far
    pub typed_prefix: String,
    /// True while `typed_prefix` is growing
    pub is_typing: bool,
    /// User-controlled pause flag
    pub is_playing: bool,
    /// Every revealed command echo and output line, in order
    pub revealed_lines: Vec<String>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters typed so far.
    pub fn typed_len(&self) -> usize {
        self.typed_prefix.chars().count()
    }
}

/// Front-end state: scrolling, help overlay and terminal geometry.
#[derive(Debug)]
pub struct ViewState {
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Pin the transcript to its last line
    pub follow: bool,
    /// Top line of the transcript when not following
    pub scroll_offset: usize,
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewState {
    /// Rows taken by chrome: title bar, body borders, progress (2) and status bar.
    pub const CHROME_ROWS: u16 = 6;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            show_help: false,
            follow: true,
            scroll_offset: 0,
            term_cols,
            term_rows,
            needs_render: true,
        }
    }

    /// Number of transcript rows visible in the body.
    pub fn body_rows(&self) -> usize {
        self.term_rows.saturating_sub(Self::CHROME_ROWS) as usize
    }

    /// Top line to display for a transcript of `total` lines.
    pub fn effective_offset(&self, total: usize) -> usize {
        let max = total.saturating_sub(self.body_rows());
        if self.follow {
            max
        } else {
            self.scroll_offset.min(max)
        }
    }

    /// Pin the view to the latest line.
    pub fn follow_bottom(&mut self) {
        self.follow = true;
        self.needs_render = true;
    }

    /// Scroll towards the start of the transcript. Detaches follow.
    pub fn scroll_up(&mut self, lines: usize, total: usize) {
        self.scroll_offset = self.effective_offset(total).saturating_sub(lines);
        self.follow = false;
        self.needs_render = true;
    }

    /// Scroll towards the end; reaching the bottom re-attaches follow.
    pub fn scroll_down(&mut self, lines: usize, total: usize) {
        let max = total.saturating_sub(self.body_rows());
        let offset = (self.effective_offset(total) + lines).min(max);
        self.scroll_offset = offset;
        self.follow = offset >= max;
        self.needs_render = true;
    }

    /// Jump to the first transcript line.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.follow = false;
        self.needs_render = true;
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}
