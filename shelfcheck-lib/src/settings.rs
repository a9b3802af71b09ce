//! User settings (`~/.config/shelfcheck/settings.toml`).
//!
//! Every field has a built-in default, so a missing file or a partial one
//! is fine. Command-line flags override whatever is loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::decision::Thresholds;
use crate::error::SettingsError;

pub const DEFAULT_HIGHLIGHTS: usize = 2;
pub const DEFAULT_LIBRARY: &str = "seattle";
pub const DEFAULT_REQUEST_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Browser-like; some catalog gateways reject unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub thresholds: Thresholds,
    pub pass: PassSettings,
    pub source: SourceSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassSettings {
    /// How many desired-format items to sample at the end of a pass.
    pub highlights: usize,
}

impl Default for PassSettings {
    fn default() -> Self {
        Self {
            highlights: DEFAULT_HIGHLIGHTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Library id used in the catalog feed URL.
    pub library: String,
    pub request_interval_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            library: DEFAULT_LIBRARY.to_string(),
            request_interval_ms: DEFAULT_REQUEST_INTERVAL_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Canonical path to the settings file: `~/.config/shelfcheck/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("shelfcheck").join("settings.toml")
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.thresholds.validate()?;
        if self.source.library.trim().is_empty() {
            return Err(SettingsError::invalid_value("source.library is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(SettingsError::invalid_value("source.timeout_secs must be positive"));
        }
        Ok(())
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from the canonical settings path.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    /// Write to `path` atomically (temp file, then rename).
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = self.to_toml()?;
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
