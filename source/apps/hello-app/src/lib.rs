// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Hello application module started by the firmware loader
//! OWNERS: @runtime
//! STATUS: Placeholder
//! API_STABILITY: Stable (entry symbol)
//! TEST_COVERAGE: 1 unit test + tests/entry.rs
//!
//! PUBLIC API:
//!   - hello_app_main(p): loader entry symbol, always returns 0
//!   - HelloApp: the startable unit behind it
//!   - TAG: log target for this module
//!
//! Replace the body of `HelloApp::start` with real application logic; the
//! exported symbol and its contract stay as they are.

#![cfg_attr(target_os = "none", no_std)]

use appkit_entry::{Application, StartParam, Status};

/// Log tag identifying this module.
pub const TAG: &str = "hello_app";

/// The application unit.
pub struct HelloApp;

impl Application for HelloApp {
    fn start(&self, param: StartParam<'_>) -> Status {
        // The parameter belongs to the host; nothing here needs it.
        let _ = param;

        log::error!(target: TAG, "Hello, World!");

        Status::SUCCESS
    }
}

appkit_entry::declare_entry!(hello_app_main, HelloApp);
