//! Configuration management for devcli-demo
//!
//! The config file lives at `<config dir>/devcli-demo/config.toml`. Every
//! field has a default, so a missing file, a missing section or a missing
//! key all fall back to the built-in values.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::player::sequencer::{Pacing, MAX_SPEED, MIN_SPEED};
use crate::tui::theme::ThemeName;

/// Directory name under the platform config dir.
const APP_DIR: &str = "devcli-demo";
const CONFIG_FILE: &str = "config.toml";

/// Errors raised while locating, reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("config file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub ui: UiConfig,
}

/// Playback pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay before each typed character, in milliseconds
    pub typing_ms: u64,
    /// Idle time after output appears, in milliseconds
    pub hold_ms: u64,
    /// Speed multiplier (0.25 to 4.0)
    pub speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            typing_ms: 50,
            hold_ms: 2000,
            speed: 1.0,
        }
    }
}

/// Appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme: terminal, classic or ocean
    pub theme: ThemeName,
    /// Show the welcome banner above the transcript
    pub show_banner: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            show_banner: true,
        }
    }
}

impl Config {
    /// Load the config from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config TOML.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render the config as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Path of the config file in the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_err)
    }

    /// Write the default config to `path`. Refuses to overwrite.
    pub fn init_at(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Pacing for the sequencer.
    ///
    /// An out-of-range speed is clamped with a warning.
    pub fn pacing(&self) -> Pacing {
        let speed = self.playback.speed;
        let clamped = if speed.is_finite() {
            speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            1.0
        };
        if clamped != speed {
            warn!(speed, clamped, "playback speed out of range");
        }
        Pacing {
            typing_interval: Duration::from_millis(self.playback.typing_ms),
            hold: Duration::from_millis(self.playback.hold_ms),
            speed: clamped,
        }
    }
}
