//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Checkout fixtures with example bundles
//! - A preconfigured command for the binary under test

pub mod fixtures;

use assert_cmd::Command;
use std::path::Path;

/// Command for the binary, isolated from the caller's CI environment
///
/// Runs in `workdir` so the default `.size-report.toml` and interchange path
/// resolve inside the test's temporary directory.
#[allow(dead_code)]
pub fn size_report_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wasm-size-report"));
    cmd.current_dir(workdir)
        .env_remove("ISSUE_NUMBER")
        .env_remove("GITHUB_ENV")
        .env_remove("RUST_LOG");
    cmd
}
