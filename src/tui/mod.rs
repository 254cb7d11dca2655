//! TUI (Text User Interface) support for devcli-demo
//!
//! Theme definitions and layout helpers shared by the player and the
//! plain CLI output.

pub mod theme;
pub mod ui;

pub use theme::{current_theme, set_theme, Theme, ThemeName};
