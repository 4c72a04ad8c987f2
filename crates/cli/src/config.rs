// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration file

use ephem_engine::RuntimeConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings read from `config.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset (e.g. "debug", "ephem_engine=trace")
    pub log_level: Option<String>,
    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
    pub runtime: RuntimeConfig,
    pub shell: ShellConfig,
}

/// Settings for the `shell` resource
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Kill shell tasks after this long (e.g. "30s", "5m")
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load from an explicit path, else the user config file if present,
    /// else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `<config dir>/ephem/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ephem").join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
