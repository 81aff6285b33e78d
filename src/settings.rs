//! Persisted application settings
//!
//! A single JSON object holding window geometry and the last directory used
//! for a file operation. Loaded once at startup and threaded explicitly into
//! the components that need it; saved on shutdown and after each successful
//! file operation. Saving is best-effort: failures are logged, never raised.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default settings file name, created next to the executable's working dir
pub const SETTINGS_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Window geometry as "WIDTHxHEIGHT"
    pub geometry: String,
    /// Last directory used for save/load/export
    pub last_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geometry: "1200x800".to_string(),
            last_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file is
    /// absent or unparseable. A parse failure is logged, not fatal.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Failed to parse settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings to `path`. Failures are logged and swallowed.
    pub fn save(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize settings: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(path, json) {
            tracing::error!("Failed to save settings to {}: {e}", path.display());
        }
    }

    /// Remember the directory containing `file_path` as the starting point
    /// for the next file dialog-equivalent.
    pub fn remember_dir(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.last_dir = parent.to_path_buf();
            }
        }
    }
}
