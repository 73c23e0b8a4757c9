// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Host runner for hello-app
//! OWNERS: @runtime
//! STATUS: Functional
//!
//! Installs a stderr logger and calls the exported entry symbol with a null
//! parameter, exiting with whatever status it returns. An optional first
//! argument names a TOML file with logger settings (`max_level = "warn"`).

#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process;

use appkit_entry::Status;
use appkit_log::{ConfigError, LogConfig};

fn main() {
    let config = match load_config(std::env::args_os().nth(1).map(PathBuf::from)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("hello-app: {err}");
            process::exit(Status::FAILURE.code());
        }
    };
    if let Err(err) = appkit_log::init_stderr(config) {
        eprintln!("hello-app: {err}");
        process::exit(Status::FAILURE.code());
    }

    let status = Status::from(hello_app::hello_app_main(std::ptr::null_mut()));
    log::logger().flush();
    if !status.is_success() {
        eprintln!("hello-app: entry returned {status}");
    }
    process::exit(status.code());
}

fn load_config(path: Option<PathBuf>) -> Result<LogConfig, ConfigError> {
    match path {
        Some(path) => LogConfig::load(&path),
        None => Ok(LogConfig::from_build_env()),
    }
}
