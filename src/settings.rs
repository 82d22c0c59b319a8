//! Runtime settings
//!
//! Persisted separately from tuning as a small JSON file next to the binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Runtime settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Debug mode: enables the moon-drop command and debug output
    pub debug: bool,
    /// Emit the positional debug log every tick (only while `debug` is on)
    pub log_positions: bool,
    /// Fixed RNG seed; `None` picks one per run
    pub seed: Option<u64>,
}

impl Settings {
    /// Settings with debug mode on
    pub fn debug() -> Self {
        Self {
            debug: true,
            log_positions: true,
            seed: None,
        }
    }

    /// Toggle debug mode (the in-game debug key)
    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
        log::info!("Debug mode: {}", self.debug);
    }

    /// Effective position logging (respects `debug`)
    pub fn effective_log_positions(&self) -> bool {
        self.debug && self.log_positions
    }

    /// Load settings from a JSON file, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("Using default settings");
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(ConfigError::Json)?;
        if settings.log_positions && !settings.debug {
            log::warn!("log_positions has no effect while debug is off");
        }
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Json)?;
        std::fs::write(path, json).map_err(|source| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }
}
