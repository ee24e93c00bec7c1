//! # InfraPulse CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each other
//! `.rs` file in that directory compiles as its own test crate against the
//! `infrapulse` binary; this module keeps the command and site-path setup in
//! one place.
//!

// Allow potentially unused code here; different test files use different helpers.
#![allow(dead_code)]

use std::path::PathBuf;

pub use assert_cmd::Command;

/// # Get InfraPulse Command (`infrapulse_cmd`)
///
/// Creates an `assert_cmd::Command` pointing at the compiled `infrapulse`
/// binary for the current test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn infrapulse_cmd() -> Command {
    Command::cargo_bin("infrapulse").expect("Failed to find infrapulse binary for testing")
}

/// # Repository Site Directory (`repo_site_dir`)
///
/// Absolute path to the `site/` directory at the workspace root, so tests
/// work regardless of the invocation directory.
pub fn repo_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("cli crate should live inside the workspace")
        .join("site")
}
