// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Panic handler for device builds.
//!
//! Reports the panic location through the installed logger, then parks the
//! core; the loader has no unwinding path back into the caller.

use core::panic::PanicInfo;

#[panic_handler]
fn panic(info: &PanicInfo<'_>) -> ! {
    match info.location() {
        Some(location) => log::error!(
            target: "panic",
            "file={} line={} col={}",
            location.file(),
            location.line(),
            location.column()
        ),
        None => log::error!(target: "panic", "location unknown"),
    }
    loop {
        core::hint::spin_loop();
    }
}
