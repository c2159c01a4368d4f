// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Front-end configuration.
//!
//! Configuration is read from a `songq.toml` named by `--config` or
//! `SONGQ_CONFIG`. Without either, defaults apply. Example:
//!
//! ```toml
//! [backend]
//! fields = ["title", "artist", "album", "rating", "lastplayed"]
//!
//! [dates]
//! short_formats = ["%d/%m/%Y", "%Y-%m-%d"]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use sq_core::{DateOptions, FilterMask};

use crate::env;
use crate::error::{Error, Result};

/// Contents of `songq.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub dates: DatesConfig,
}

/// The simulated query backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Field names the backend can filter on. Absent means every field.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

/// Absolute date parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatesConfig {
    /// chrono formats tried before the built-in day-month patterns.
    #[serde(default)]
    pub short_formats: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads from `explicit`, else from `SONGQ_CONFIG`, else returns defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(env::config_path) {
            Some(path) => Self::load(&path),
            None => Ok(Config::default()),
        }
    }

    /// The backend's supported fields.
    pub fn filter_mask(&self) -> Result<FilterMask> {
        match &self.backend.fields {
            Some(names) => Ok(FilterMask::from_names(names)?),
            None => Ok(FilterMask::all()),
        }
    }

    /// Date options built from `[dates]`.
    pub fn date_options(&self) -> Result<DateOptions> {
        match &self.dates.short_formats {
            Some(formats) => Ok(DateOptions::with_formats(formats.iter().cloned())?),
            None => Ok(DateOptions::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
