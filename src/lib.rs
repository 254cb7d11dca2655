//! devcli-demo - the DevCLI terminal demo as a library
//!
//! The core is the [`player::Sequencer`], a deterministic replay of a
//! scripted terminal session driven by a logical clock. Around it sit the
//! ratatui front end ([`player::play_demo`]), the built-in DevCLI script
//! ([`script::devcli_demo`]) and the DevCLI reference content
//! ([`reference`]).

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod reference;
pub mod script;
pub mod tui;

pub use config::Config;
pub use player::{Pacing, Sequencer};
pub use script::{Script, ScriptEntry};
