//! # Configuration
//!
//! Codec configuration stored at `~/.config/uuid62/config` (TOML).
//!
//! ```toml
//! alphabet = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
//! # length = 22
//! ```
//!
//! A missing file means defaults. The loaded configuration is turned into an
//! immutable [`Uuid62`] with [`Config::codec`]; nothing is stored globally.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    alphabet::Alphabet,
    constants::{CONFIG_DIR, CONFIG_FILENAME},
    id::Uuid62,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Symbols used for encoding, in digit order
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Encoded length; derived from the alphabet when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl Config {
    /// Returns the path to the config file (~/.config/uuid62/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config.
    pub fn path() -> Option<PathBuf> {
        get_home_override()
            .or_else(dirs::home_dir)
            .map(|home| home.join(".config").join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Loads the config file, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads the config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        debug!(
            path = %path.display(),
            base = config.alphabet.len(),
            length = ?config.length,
            "loaded config"
        );
        Ok(config)
    }

    /// Parses a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Saves the config to ~/.config/uuid62/config, creating the directory.
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Builds the codec described by this config.
    pub fn codec(&self) -> Result<Uuid62> {
        let mut builder = Uuid62::builder().alphabet(self.alphabet.clone());
        if let Some(length) = self.length {
            builder = builder.length(length);
        }
        Ok(builder.build()?)
    }
}
