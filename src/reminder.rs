//! Persisted daily-reminder state.
//!
//! A `{hour, minute, enabled}` triple in a small JSON file under the
//! platform config directory. Scheduling the actual notification is the
//! platform shell's job; only the persisted state lives here, deliberately
//! apart from entry storage — this is not journal data.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// When (and whether) to nudge the user to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// 0–23.
    pub hour: u8,
    /// 0–59.
    pub minute: u8,
    pub enabled: bool,
}

impl Default for ReminderSettings {
    /// 20:00, disabled — matching what a fresh install shows.
    fn default() -> Self {
        Self {
            hour: 20,
            minute: 0,
            enabled: false,
        }
    }
}

impl ReminderSettings {
    /// Read the persisted state; a missing file yields the default.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("could not read reminder state from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("reminder state at {} is not valid", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("could not write reminder state to {}", path.display()))
    }

    /// The platform-conventional location of the state file.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "feelio")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("reminder.json"))
    }
}
