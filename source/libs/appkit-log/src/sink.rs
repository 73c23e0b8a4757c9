// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Byte sinks receiving rendered lines.

/// Destination for rendered log lines.
///
/// Each call carries one complete line. Sinks are best-effort: they must not
/// block indefinitely or panic, and write failures are dropped.
pub trait ByteSink: Send + Sync {
    /// Writes one rendered line.
    fn write_bytes(&self, bytes: &[u8]);

    /// Flushes buffered output, if any.
    fn flush(&self) {}
}

/// Sink forwarding every byte to a host-provided debug console routine.
pub struct PutcSink {
    putc: fn(u8),
}

impl PutcSink {
    /// Wraps the host's single-byte console writer.
    pub const fn new(putc: fn(u8)) -> Self {
        Self { putc }
    }
}

impl ByteSink for PutcSink {
    fn write_bytes(&self, bytes: &[u8]) {
        for &byte in bytes {
            (self.putc)(byte);
        }
    }
}

/// Sink writing whole lines to the process stderr.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl ByteSink for StderrSink {
    fn write_bytes(&self, bytes: &[u8]) {
        use std::io::Write;

        let _ = std::io::stderr().lock().write_all(bytes);
    }

    fn flush(&self) {
        use std::io::Write;

        let _ = std::io::stderr().flush();
    }
}
