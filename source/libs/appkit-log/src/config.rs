// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Logger configuration.
//!
//! Device builds take the level from `APPKIT_LOG_LEVEL` at compile time.
//! Host builds may additionally read a TOML document:
//!
//! ```toml
//! max_level = "warn"
//! ```

use log::LevelFilter;

/// Runtime settings applied when a logger is installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// Most verbose level that still reaches the sink.
    pub max_level: LevelFilter,
}

impl LogConfig {
    /// Level used when nothing else is configured.
    pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Trace;

    /// Creates a config with the given level ceiling.
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    /// Reads `APPKIT_LOG_LEVEL` as captured at build time.
    ///
    /// Unset or unrecognised values fall back to [`Self::DEFAULT_LEVEL`].
    pub fn from_build_env() -> Self {
        Self::from_level_name(option_env!("APPKIT_LOG_LEVEL"))
    }

    fn from_level_name(name: Option<&str>) -> Self {
        name.and_then(|name| name.trim().parse::<LevelFilter>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL)
    }
}

#[cfg(feature = "std")]
mod file {
    use std::path::Path;

    use log::LevelFilter;
    use serde::Deserialize;

    use super::LogConfig;
    use crate::ConfigError;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ConfigFile {
        max_level: Option<String>,
    }

    impl LogConfig {
        /// Parses a TOML document; a missing `max_level` keeps the default.
        pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile = toml::from_str(text)?;
            match file.max_level {
                None => Ok(Self::default()),
                Some(name) => name
                    .trim()
                    .parse::<LevelFilter>()
                    .map(Self::new)
                    .map_err(|_| ConfigError::UnknownLevel(name)),
            }
        }

        /// Reads and parses a TOML config file.
        pub fn load(path: &Path) -> Result<Self, ConfigError> {
            let text = std::fs::read_to_string(path)?;
            Self::from_toml_str(&text)
        }
    }
}
