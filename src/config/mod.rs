// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! transport preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Autoplay on load
//! - `[controls]` - Overlay auto-hide delay
//! - `[sync]` - Time sync loop cadence
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TRANSPORT_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_transport::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.controls.auto_hide_secs = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::{AutoHideDelay, SyncInterval};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedTransport";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TRANSPORT_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Playback behavior on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Start playing as soon as the session is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

/// Transport overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Seconds of inactivity before the overlay hides.
    #[serde(
        default = "default_auto_hide_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_hide_secs: Option<u32>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            auto_hide_secs: default_auto_hide_secs(),
        }
    }
}

/// Time sync loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncConfig {
    /// Milliseconds between two position updates.
    #[serde(
        default = "default_sync_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_sync_interval_ms(),
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_auto_hide_secs() -> Option<u32> {
    Some(DEFAULT_AUTO_HIDE_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_sync_interval_ms() -> Option<u64> {
    Some(DEFAULT_SYNC_INTERVAL_MS)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

// =============================================================================
// Runtime settings
// =============================================================================

/// Validated settings handed to every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackSettings {
    pub autoplay: bool,
    pub auto_hide: AutoHideDelay,
    pub sync_interval: SyncInterval,
}

impl PlaybackSettings {
    /// Converts persisted values to runtime newtypes, clamping out-of-range values.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            autoplay: config.playback.autoplay.unwrap_or(false),
            auto_hide: config
                .controls
                .auto_hide_secs
                .map(AutoHideDelay::new)
                .unwrap_or_default(),
            sync_interval: config
                .sync
                .interval_ms
                .map(SyncInterval::new)
                .unwrap_or_default(),
        }
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))?;
    Some(dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Returns the default configuration and a warning message when the file
/// exists but cannot be read or parsed.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
