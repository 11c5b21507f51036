//! `dip show`, `dip diff`, `dip pull` and `dip run` without a container engine.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;

use crate::support::{DEFINITION, Sandbox};

#[test]
fn test_show_prints_definition_between_blank_lines() {
    let sandbox = Sandbox::new();
    sandbox.install("fizz", &sandbox.service("fizz", Some(DEFINITION)), &[]);

    sandbox
        .dip()
        .args(["show", "fizz"])
        .assert()
        .success()
        .stdout(format!("\n{}\n\n", DEFINITION.trim_end()));
}

#[test]
fn test_show_includes_override_file() {
    let sandbox = Sandbox::new();
    let source = sandbox.service("fizz", Some(DEFINITION));
    std::fs::write(source.join("docker-compose.override.yml"), "OVERRIDE").unwrap();
    sandbox.install("fizz", &source, &[]);

    sandbox
        .dip()
        .args(["show", "fizz"])
        .assert()
        .success()
        .stdout(format!("\n{}\n\n\nOVERRIDE\n\n", DEFINITION.trim_end()));
}

#[test]
fn test_show_inaccessible_remote_warns_before_definition() {
    let sandbox = Sandbox::new();
    let source = sandbox.service("fizz", Some(DEFINITION));
    sandbox.install("fizz", &source, &["-r", "origin/master", "-s", "0"]);

    sandbox
        .dip()
        .args(["show", "fizz"])
        .env("GIT_CEILING_DIRECTORIES", source.parent().unwrap())
        .assert()
        .success()
        .stdout(format!(
            "\nLocal service has diverged from remote or is inaccessible.\nSleeping for 0s\n\n\n{}\n\n",
            DEFINITION.trim_end()
        ));
}

#[test]
fn test_show_without_definition_fails() {
    let sandbox = Sandbox::new();
    sandbox.install("fizz", &sandbox.service("fizz", None), &[]);

    sandbox
        .dip()
        .args(["show", "fizz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No docker-compose definition found"));
}

#[test]
fn test_diff_without_remote_is_silent() {
    let sandbox = Sandbox::new();
    sandbox.install("fizz", &sandbox.service("fizz", Some(DEFINITION)), &[]);

    sandbox
        .dip()
        .args(["diff", "fizz", "--exit-code"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_diff_exit_code_flags_inaccessible_remote() {
    let sandbox = Sandbox::new();
    let source = sandbox.service("fizz", Some(DEFINITION));
    sandbox.install("fizz", &source, &["-r", "origin/master"]);

    sandbox
        .dip()
        .args(["diff", "fizz", "--exit-code"])
        .env("GIT_CEILING_DIRECTORIES", source.parent().unwrap())
        .assert()
        .code(1);
}

#[test]
fn test_pull_undeclared_service_fails_before_engine() {
    let sandbox = Sandbox::new();
    sandbox.install(
        "fizz",
        &sandbox.service("fizz", Some("services:\n  other:\n    image: alpine\n")),
        &[],
    );

    sandbox
        .dip()
        .args(["pull", "fizz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service 'fizz' is not defined"));
}

#[test]
fn test_run_without_compose_on_path_fails() {
    let sandbox = Sandbox::new();
    sandbox.install("fizz", &sandbox.service("fizz", Some(DEFINITION)), &[]);
    let empty = sandbox.service("empty-path", None);

    sandbox
        .dip()
        .args(["run", "fizz", "--", "--flag"])
        .env("PATH", &empty)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot find 'docker-compose' on PATH"));
}

#[test]
fn test_run_unknown_entry_fails() {
    Sandbox::new()
        .dip()
        .args(["run", "fizz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'fizz' is not installed."));
}
