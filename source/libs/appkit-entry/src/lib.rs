// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]
#![deny(clippy::all, missing_docs)]

//! CONTEXT: Entry glue for application modules started by the firmware loader
//! OWNERS: @runtime
//! PUBLIC API: `Application`, `launch()`, `declare_entry!`, `StartParam`, `Status`
//! INVARIANTS: The startup parameter is never dereferenced; the exported
//!             symbol returns the unit's status unchanged

mod param;
mod status;

#[cfg(all(feature = "panic-handler", target_os = "none"))]
mod panic;

pub use param::StartParam;
pub use status::Status;

/// A unit of work the host loader can start.
///
/// Implementations receive the host's opaque startup parameter and report a
/// status; the loader treats that status as the module's exit code.
pub trait Application {
    /// Runs the application to completion.
    fn start(&self, param: StartParam<'_>) -> Status;
}

/// Starts `app` with the host-supplied parameter.
pub fn launch<A: Application + ?Sized>(app: &A, param: StartParam<'_>) -> Status {
    app.start(param)
}

/// Exports the loader-facing entry symbol for an [`Application`].
///
/// The symbol name is the application's host-assigned identity:
///
/// ```ignore
/// pub struct MyApp;
/// impl appkit_entry::Application for MyApp { /* ... */ }
///
/// appkit_entry::declare_entry!(my_app_main, MyApp);
/// ```
///
/// expands to `#[no_mangle] pub extern "C" fn my_app_main(p: *mut c_void) -> i32`.
#[macro_export]
macro_rules! declare_entry {
    ($symbol:ident, $app:expr) => {
        /// Entry point resolved by name and invoked by the host loader.
        #[no_mangle]
        pub extern "C" fn $symbol(p: *mut ::core::ffi::c_void) -> i32 {
            $crate::launch(&$app, $crate::StartParam::from_raw(p)).code()
        }
    };
}
