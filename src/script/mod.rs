//! Demo scripts
//!
//! A script is a fixed, ordered list of simulated command/output pairs.
//! Scripts come from the built-in DevCLI session or from a TOML file:
//!
//! ```toml
//! [[entry]]
//! command = "devcli --version"
//! output = ["DevCLI v2.4.1 (stable)"]
//! post_typing_delay_ms = 500
//! ```

mod builtin;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use builtin::devcli_demo;

/// Prefix of the command echo line written to the transcript.
pub const PROMPT: &str = "$ ";

/// Default settle delay for entries that do not specify one.
pub const DEFAULT_POST_TYPING_DELAY_MS: u64 = 800;

/// Longest settle delay a script file may ask for (one hour).
pub const MAX_POST_TYPING_DELAY_MS: u64 = 60 * 60 * 1000;

/// Errors that can occur while loading a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Script has no entries")]
    Empty,

    #[error("Entry {entry}: post_typing_delay_ms {delay_ms} exceeds the {max} ms limit")]
    DelayTooLong { entry: usize, delay_ms: u64, max: u64 },
}

/// One simulated terminal interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Literal text of the simulated input line
    pub command: String,
    /// Output lines, rendered verbatim and in order
    #[serde(default)]
    pub output: Vec<String>,
    /// Wait after the command is fully typed before output is revealed
    #[serde(default = "default_post_typing_delay_ms", alias = "delay")]
    pub post_typing_delay_ms: u64,
}

fn default_post_typing_delay_ms() -> u64 {
    DEFAULT_POST_TYPING_DELAY_MS
}

impl ScriptEntry {
    /// Number of characters typed for this command.
    pub fn command_len(&self) -> usize {
        self.command.chars().count()
    }

    /// The command echo line (`$ <command>`).
    pub fn echo_line(&self) -> String {
        format!("{}{}", PROMPT, self.command)
    }

    /// Lines appended to the transcript when this entry is revealed:
    /// the command echo followed by every output line.
    pub fn reveal_lines(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.echo_line()).chain(self.output.iter().cloned())
    }
}

/// TOML file layout: a list of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default, rename = "entry")]
    entries: Vec<ScriptEntry>,
}

/// A fixed, ordered sequence of script entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    entries: Vec<ScriptEntry>,
}

impl Script {
    /// Build a script from entries. An empty script is allowed here;
    /// the player treats it as permanently idle.
    pub fn from_entries(entries: Vec<ScriptEntry>) -> Self {
        Self { entries }
    }

    /// Parse a script from TOML. Rejects scripts without entries and
    /// entries whose settle delay exceeds [`MAX_POST_TYPING_DELAY_MS`].
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let file: ScriptFile = toml::from_str(content)?;
        if file.entries.is_empty() {
            return Err(ScriptError::Empty);
        }
        if let Some((i, entry)) = file
            .entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.post_typing_delay_ms > MAX_POST_TYPING_DELAY_MS)
        {
            return Err(ScriptError::DelayTooLong {
                entry: i + 1,
                delay_ms: entry.post_typing_delay_ms,
                max: MAX_POST_TYPING_DELAY_MS,
            });
        }
        Ok(Self::from_entries(file.entries))
    }

    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ScriptEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Transcript produced by one full pass over the script.
    pub fn one_pass(&self) -> Vec<String> {
        self.entries.iter().flat_map(ScriptEntry::reveal_lines).collect()
    }
}

/// Load the script at `path`, or the built-in DevCLI session when `None`.
pub fn load_or_builtin(path: Option<&Path>) -> Result<Script, ScriptError> {
    match path {
        Some(path) => Script::load(path),
        None => Ok(devcli_demo()),
    }
}
