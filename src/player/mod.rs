//! Terminal demo player
//!
//! Replays a scripted terminal session: commands are typed one character
//! at a time, their output appears all at once, then the next entry plays.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `timer`: the single-slot cancellable timeline
//! - `sequencer`: the playback state machine, driven by a logical clock
//! - `state`: PlaybackState, ViewState and shared types (Phase, InputResult)
//! - `classify`: output line categories used for styling
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (title, transcript, progress bar, status bar, help)
//! - `native`: terminal setup and the event loop
//!
//! # Usage
//!
//! ```no_run
//! use devcli_demo::player::{play_demo, PlayerOptions};
//! use devcli_demo::script::devcli_demo;
//!
//! let summary = play_demo(devcli_demo(), &PlayerOptions::default()).unwrap();
//! println!("Watched {} commands", summary.commands_shown);
//! ```

pub mod classify;
pub(crate) mod input;
mod native;
pub mod render;
pub mod sequencer;
pub mod state;
pub mod timer;

pub use classify::{classify_line, LineCategory};
pub use native::{
    play_demo, run_loop, Clock, CrosstermEventReader, EventReader, MonotonicClock,
    PlaybackSummary, PlayerOptions,
};
pub use sequencer::{Pacing, Sequencer, Step};
pub use state::{InputResult, Phase, PlaybackState, ViewState};
