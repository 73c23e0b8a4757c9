// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors raised while installing a logger.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LogError {
    /// A logger was already installed for this process.
    #[error("a logger is already installed")]
    AlreadyInstalled,
}

/// Errors raised while loading a [`crate::LogConfig`].
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid TOML or has unexpected keys.
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
    /// `max_level` names no known level.
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
}
