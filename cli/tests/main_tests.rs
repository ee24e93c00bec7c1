//! # InfraPulse CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! Verifies top-level CLI behavior: the help text lists every command, and
//! command aliases resolve.
//!

// Declare and use the common module for helpers like `infrapulse_cmd()`
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_all_commands() {
    infrapulse_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("chat"));
}

#[test]
fn test_subcommand_help() {
    infrapulse_cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--no-cors"));
}

#[test]
fn test_unknown_command_fails() {
    infrapulse_cmd().arg("definitely-not-a-command").assert().failure();
}
