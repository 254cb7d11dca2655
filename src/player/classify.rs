//! Display category of transcript lines.
//!
//! Classification looks only at literal line prefixes. The first matching
//! rule wins; categories affect presentation only.

use serde::Serialize;

/// Display category of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineCategory {
    /// `$ command` echo
    CommandEcho,
    /// Interactive question or selected list item
    Prompt,
    /// Check-marked step
    Success,
    /// AI assistant header
    Assistant,
    /// Language runtime status row
    RuntimeStatus,
    /// Project/path listing row
    Path,
    /// Anything else
    Plain,
}

/// Prefixes of the selected-item marker.
const PROMPT_PREFIXES: &[&str] = &["?", "  ❯"];
const SUCCESS_PREFIX: &str = "✓";
const ASSISTANT_PREFIX: &str = "🤖";
/// Python, Node.js, Go and Rust runtime icons.
const RUNTIME_PREFIXES: &[&str] = &["  🐍", "  ⬢", "  🐹", "  🦀"];
const PATH_PREFIX: &str = "  📁";

/// Classify a transcript line by its prefix.
pub fn classify_line(line: &str) -> LineCategory {
    if line.starts_with('$') {
        LineCategory::CommandEcho
    } else if PROMPT_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineCategory::Prompt
    } else if line.starts_with(SUCCESS_PREFIX) {
        LineCategory::Success
    } else if line.starts_with(ASSISTANT_PREFIX) {
        LineCategory::Assistant
    } else if RUNTIME_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineCategory::RuntimeStatus
    } else if line.starts_with(PATH_PREFIX) {
        LineCategory::Path
    } else {
        LineCategory::Plain
    }
}

impl LineCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCategory::CommandEcho => "command-echo",
            LineCategory::Prompt => "prompt",
            LineCategory::Success => "success",
            LineCategory::Assistant => "assistant",
            LineCategory::RuntimeStatus => "runtime-status",
            LineCategory::Path => "path",
            LineCategory::Plain => "plain",
        }
    }
}
