//! Settings configuration
//!
//! Default values are defined in `config/default.toml`. A user file only
//! needs the keys it overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use jpnorm_engine::{DedupOptions, NormalizeOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// Which entry point to run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `normalize` with the `[normalize]` options
    #[default]
    Normalize,
    /// `normalize_for_dedup` with the `[dedup]` options
    Dedup,
}

/// How results are printed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mode: Mode,
    pub normalize: NormalizeOptions,
    #[serde(default)]
    pub dedup: DedupOptions,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Fold `user` into `defaults` table by table. Nested tables merge key by
/// key; any other value replaces the default outright.
fn overlay_tables(defaults: &mut toml::Table, user: toml::Table) {
    for (key, value) in user {
        match value {
            toml::Value::Table(section) => {
                if let Some(toml::Value::Table(existing)) = defaults.get_mut(&key) {
                    overlay_tables(existing, section);
                } else {
                    defaults.insert(key, toml::Value::Table(section));
                }
            }
            value => {
                defaults.insert(key, value);
            }
        }
    }
}

/// Build [`Settings`] from a user file layered over `config/default.toml`.
fn settings_from_str(user_content: &str) -> Result<Settings> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG_TOML)?;
    overlay_tables(&mut merged, toml::from_str(user_content)?);
    Ok(toml::Value::Table(merged).try_into()?)
}

impl Settings {
    /// Get the configuration file path (`<config dir>/config.toml`)
    pub fn config_file() -> Option<PathBuf> {
        ProjectDirs::from("dev", "jpnorm", "jpnorm").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load settings from the user configuration file.
    /// Falls back to embedded default.toml if there is none.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            debug!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        settings_from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}
