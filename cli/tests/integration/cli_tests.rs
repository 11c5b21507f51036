//! Top-level CLI surface.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;

use crate::support::Sandbox;

#[test]
fn test_help_lists_commands() {
    let sandbox = Sandbox::new();
    let assert = sandbox.dip().arg("--help").assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    for cmd in ["install", "uninstall", "list", "show", "diff", "pull", "run", "config", "reset"] {
        assert!(out.contains(cmd), "help is missing `{cmd}`:\n{out}");
    }
}

#[test]
fn test_version_prints_name_and_version() {
    Sandbox::new()
        .dip()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("dip {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    Sandbox::new()
        .dip()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    Sandbox::new().dip().arg("frobnicate").assert().failure();
}

#[test]
fn test_errors_are_prefixed_and_exit_one() {
    Sandbox::new()
        .dip()
        .args(["show", "fizz"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: 'fizz' is not installed."));
}
