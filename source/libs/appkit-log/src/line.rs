// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity rendering of `[LEVEL target] message\n` lines.

use core::fmt::{self, Write};

use log::Level;

/// Upper bound for one rendered line, newline included.
pub const MAX_LINE: usize = 256;

const ELLIPSIS: &[u8] = b"...";

/// Stack buffer holding a single rendered line.
///
/// Text past the capacity is dropped and the line is marked truncated; the
/// final characters are then replaced with `...` so the cut is visible on the
/// console. The contents always stay valid UTF-8.
pub struct LineBuffer {
    buf: [u8; MAX_LINE],
    len: usize,
    truncated: bool,
}

impl LineBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self { buf: [0u8; MAX_LINE], len: 0, truncated: false }
    }

    /// Appends text, keeping one byte free for the trailing newline.
    ///
    /// Text that does not fit is cut at the last whole character.
    pub fn push_str(&mut self, text: &str) {
        if self.truncated {
            return;
        }
        let room = (MAX_LINE - 1).saturating_sub(self.len);
        let mut take = text.len().min(room);
        while !text.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&text.as_bytes()[..take]);
        self.len += take;
        if take < text.len() {
            self.truncated = true;
        }
    }

    /// Returns the rendered bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Whether any text was dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn finish(&mut self) {
        if self.truncated {
            let mut start = self.len - ELLIPSIS.len();
            // Step back over continuation bytes so no character is split.
            while start > 0 && self.buf[start] & 0xC0 == 0x80 {
                start -= 1;
            }
            self.buf[start..start + ELLIPSIS.len()].copy_from_slice(ELLIPSIS);
            self.len = start + ELLIPSIS.len();
        }
        self.buf[self.len] = b'\n';
        self.len += 1;
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

/// Renders one record into a newline-terminated line.
pub fn render(level: Level, target: &str, args: fmt::Arguments<'_>) -> LineBuffer {
    let mut line = LineBuffer::new();
    line.push_str("[");
    line.push_str(level.as_str());
    line.push_str(" ");
    line.push_str(target);
    line.push_str("] ");
    // LineBuffer::write_str never fails; truncation is tracked separately.
    let _ = line.write_fmt(args);
    line.finish();
    line
}
