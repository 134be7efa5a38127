//! User settings with on-disk persistence.
//!
//! Settings load once at session start from the platform config directory
//! and fall back to defaults when the file is missing or malformed. Saves
//! write through a temp file in the same directory so a crash mid-write
//! never truncates the existing file.

use crate::constants::{DEFAULT_HIGHLIGHT_COLOR, DEFAULT_UNDERLINE_COLOR, MAX_DOCUMENT_SIZE_MB};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Tunable engine settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum accepted document size in MB
    pub max_document_size_mb: u64,
    /// Initial highlight color for new sessions
    pub highlight_color: String,
    /// Initial underline color for new sessions
    pub underline_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_document_size_mb: MAX_DOCUMENT_SIZE_MB,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            underline_color: DEFAULT_UNDERLINE_COLOR.to_string(),
        }
    }
}

impl Settings {
    /// Default on-disk location: `<config_dir>/docmark/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docmark").join("settings.json"))
    }

    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, falling back to defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "malformed settings file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist settings to `path` atomically (temp file + rename).
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(path)?;
        Ok(())
    }
}
