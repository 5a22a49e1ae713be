//! Configuration management for judgeseed
//!
//! Handles reading/writing ~/.judgeseed/config.toml

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global judgeseed configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub fixtures: FixtureConfig,
}

/// Store-specific configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store root directory; defaults to ~/.judgeseed/store
    pub dir: Option<PathBuf>,
}

/// Fixture-specific configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Base directory holding files/examples/; defaults to the
    /// current directory
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from ~/.judgeseed/config.toml
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = paths::config_file();

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    /// Save configuration to ~/.judgeseed/config.toml
    pub fn save(&self) -> Result<()> {
        let config_path = paths::config_file();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))
    }

    /// Get the configured store root, if any
    pub fn store_dir(&self) -> Option<&Path> {
        self.store.dir.as_deref()
    }

    /// Get the configured fixtures base directory, if any
    pub fn fixtures_base_dir(&self) -> Option<&Path> {
        self.fixtures.base_dir.as_deref()
    }
}
