// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-thread record capture for host tests.
//!
//! [`capture`] installs a process-wide capturing logger on first use and
//! collects only the records emitted on the calling thread, so tests running
//! in parallel see their own records. It cannot observe anything if another
//! logger was installed first in the same test binary.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::line::render;

/// A record as observed by the capturing logger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Severity.
    pub level: Level,
    /// Record target (the emitting module's tag).
    pub target: String,
    /// Formatted message.
    pub message: String,
}

impl CapturedRecord {
    /// Renders the record the way [`crate::LineLogger`] would.
    pub fn to_line(&self) -> String {
        let line = render(self.level, &self.target, format_args!("{}", self.message));
        String::from_utf8_lossy(line.as_bytes()).into_owned()
    }
}

thread_local! {
    static RECORDS: RefCell<Option<Vec<CapturedRecord>>> = const { RefCell::new(None) };
}

struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        // Formatting may itself log, so it must finish before the borrow.
        let message = record.args().to_string();
        RECORDS.with(|cell| {
            if let Some(records) = cell.borrow_mut().as_mut() {
                records.push(CapturedRecord {
                    level: record.level(),
                    target: record.target().to_owned(),
                    message,
                });
            }
        });
    }

    fn flush(&self) {}
}

fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Runs `f` and returns its result together with the records it emitted.
///
/// Not reentrant: a nested call restarts collection for the outer one.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedRecord>) {
    install();
    RECORDS.with(|cell| *cell.borrow_mut() = Some(Vec::new()));
    let result = f();
    let records = RECORDS.with(|cell| cell.borrow_mut().take().unwrap_or_default());
    (result, records)
}
