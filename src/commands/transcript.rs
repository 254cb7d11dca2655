//! Transcript command handler
//!
//! Runs the sequencer on a virtual clock and prints what the player would
//! have shown after the requested number of uninterrupted loops.

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use devcli_demo::cli::TranscriptArgs;
use devcli_demo::player::{classify_line, LineCategory};
use devcli_demo::script::load_or_builtin;
use devcli_demo::tui::current_theme;
use devcli_demo::{Pacing, Script, Sequencer};

use super::{load_config, stdout_is_tty};

#[derive(Debug, Serialize)]
pub struct TranscriptLine {
    pub text: String,
    pub category: LineCategory,
}

#[derive(Debug, Serialize)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
    /// Virtual time the loops took
    pub duration_ms: u64,
}

/// Play `loops` full passes of `script` without interruption.
///
/// Fails when the total virtual time does not fit in a `Duration`.
pub fn record(script: Script, pacing: Pacing, loops: u32) -> Result<Transcript> {
    let mut sequencer = Sequencer::new(script, pacing);
    let duration = sequencer
        .loop_duration()
        .checked_mul(loops)
        .ok_or_else(|| anyhow!("{} loops of this script take too long to play", loops))?;
    sequencer.start(Duration::ZERO);
    sequencer.tick(duration);

    let lines = sequencer
        .state()
        .revealed_lines
        .iter()
        .map(|text| TranscriptLine {
            text: text.clone(),
            category: classify_line(text),
        })
        .collect();

    Ok(Transcript {
        lines,
        duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
    })
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &TranscriptArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let script = load_or_builtin(args.source.script.as_deref()).context("Failed to load script")?;
    let transcript = record(script, config.pacing(), args.loops)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
        return Ok(());
    }

    let colored = stdout_is_tty();
    let theme = current_theme();
    for line in &transcript.lines {
        if colored {
            println!("{}", theme.category_text(line.category, &line.text));
        } else {
            println!("{}", line.text);
        }
    }
    Ok(())
}
