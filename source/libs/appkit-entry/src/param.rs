// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

use core::ffi::c_void;
use core::marker::PhantomData;

/// Opaque startup parameter supplied by the host loader.
///
/// The value belongs to the host and is only valid while the entry call is
/// running, which the lifetime enforces. There is deliberately no way to read
/// through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct StartParam<'a> {
    raw: *mut c_void,
    _call: PhantomData<&'a mut c_void>,
}

impl<'a> StartParam<'a> {
    /// Wraps the raw value received on the entry symbol.
    pub const fn from_raw(raw: *mut c_void) -> Self {
        Self { raw, _call: PhantomData }
    }

    /// Returns the raw value, e.g. to hand it back to a host API.
    pub const fn as_ptr(self) -> *mut c_void {
        self.raw
    }

    /// Whether the host passed no parameter.
    pub fn is_null(self) -> bool {
        self.raw.is_null()
    }

    /// Address of the handle, for diagnostics only.
    pub fn addr(self) -> usize {
        self.raw as usize
    }
}

impl StartParam<'static> {
    /// The absent parameter.
    pub const fn null() -> Self {
        Self::from_raw(core::ptr::null_mut())
    }
}
