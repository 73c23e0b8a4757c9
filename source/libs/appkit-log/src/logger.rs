// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

use log::{LevelFilter, Log, Metadata, Record};

use crate::line::render;
use crate::sink::ByteSink;
use crate::{LogConfig, LogError};

/// `log::Log` implementation writing one rendered line per record.
///
/// Holds no mutable state, so it may be shared by any number of callers.
pub struct LineLogger<S> {
    sink: S,
    max_level: LevelFilter,
}

impl<S: ByteSink> LineLogger<S> {
    /// Creates a logger over `sink`, gated at `config.max_level`.
    pub const fn new(sink: S, config: LogConfig) -> Self {
        Self { sink, max_level: config.max_level }
    }

    /// Returns the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: ByteSink> Log for LineLogger<S> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = render(record.level(), record.target(), *record.args());
        self.sink.write_bytes(line.as_bytes());
    }

    fn flush(&self) {
        self.sink.flush();
    }
}

/// Installs `logger` as the process logger and applies `config.max_level`.
pub fn init(logger: &'static dyn Log, config: LogConfig) -> Result<(), LogError> {
    log::set_logger(logger).map_err(|_| LogError::AlreadyInstalled)?;
    log::set_max_level(config.max_level);
    Ok(())
}

/// Installs a [`LineLogger`] over stderr.
#[cfg(feature = "std")]
pub fn init_stderr(config: LogConfig) -> Result<(), LogError> {
    let logger: &'static LineLogger<crate::StderrSink> =
        Box::leak(Box::new(LineLogger::new(crate::StderrSink, config)));
    init(logger, config)
}
