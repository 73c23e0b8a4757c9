// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Line-oriented logging backend for application modules
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Unstable
//! TEST_COVERAGE: Unit tests per module + tests/config_file.rs
//!
//! PUBLIC API: LineLogger, ByteSink, PutcSink, StderrSink (std), LogConfig, init()
//! DEPENDS_ON: log (facade), thiserror, serde + toml (std only)
//!
//! Applications log through the `log` facade with the module tag as the
//! record target. This crate renders each record as a single
//! `[LEVEL tag] message` line and hands it to whatever byte sink the host
//! exposes (a debug console routine on device, stderr on the host).

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "capture")]
pub mod capture;
mod config;
mod error;
mod line;
mod logger;
mod sink;

pub use config::LogConfig;
#[cfg(feature = "std")]
pub use error::ConfigError;
pub use error::LogError;
pub use line::{render, LineBuffer, MAX_LINE};
pub use logger::{init, LineLogger};
#[cfg(feature = "std")]
pub use logger::init_stderr;
pub use sink::{ByteSink, PutcSink};
#[cfg(feature = "std")]
pub use sink::StderrSink;

pub use log::{Level, LevelFilter};
