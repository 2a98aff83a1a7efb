use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Tick;

/// Display geometry and history bounds, fixed for the lifetime of a
/// display.
///
/// Missing fields fall back to their defaults when loading, so a config
/// file only has to override what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of connected input devices (players).
    pub inputs: usize,
    /// Buttons per input device.
    pub buttons: usize,
    /// Furthest tick distance still drawn; older edges clamp here.
    pub track_limit: Tick,
    /// Tick age at which stored transitions are evicted.
    pub track_length: Tick,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            inputs: 2,
            buttons: 5,
            track_limit: 200,
            track_length: 400,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one input device is required")]
    NoInputs,
    #[error("at least one button per input is required")]
    NoButtons,
    #[error("track_limit must be at least 1 tick")]
    ZeroTrackLimit,
    #[error("track_length ({length}) must cover the visible window ({limit})")]
    HistoryShorterThanWindow { length: Tick, limit: Tick },
}

impl DisplayConfig {
    /// Check that a display built from this config can work.
    ///
    /// A history window shorter than the visible window would evict
    /// edges that are still on screen, so that combination is rejected
    /// rather than rendered wrongly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inputs == 0 {
            return Err(ConfigError::NoInputs);
        }
        if self.buttons == 0 {
            return Err(ConfigError::NoButtons);
        }
        if self.track_limit == 0 {
            return Err(ConfigError::ZeroTrackLimit);
        }
        if self.track_length < self.track_limit {
            return Err(ConfigError::HistoryShorterThanWindow {
                length: self.track_length,
                limit: self.track_limit,
            });
        }
        Ok(())
    }

    /// Load from the platform config dir, falling back to defaults.
    pub fn load() -> Self {
        Self::load_default_path().unwrap_or_default()
    }

    fn load_default_path() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save to the platform config dir.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("org", "pentatonic-hero", "pentavis") {
            Ok(proj_dirs.config_dir().join("display.json"))
        } else {
            Ok(PathBuf::from(".pentavis-display.json"))
        }
    }
}
