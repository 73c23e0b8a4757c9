// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// Completion status returned to the host loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Status(i32);

impl Status {
    /// Normal completion.
    pub const SUCCESS: Status = Status(0);
    /// Generic failure, matching the loader's `exit(-1)` convention.
    pub const FAILURE: Status = Status(-1);

    /// Wraps a raw status code.
    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// Raw code handed to the loader.
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether this is [`Status::SUCCESS`].
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.0
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            f.write_str("success")
        } else {
            write!(f, "failure ({})", self.0)
        }
    }
}
