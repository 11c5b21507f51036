//! `dip install` / `dip uninstall` against a temp registry.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;

use crate::support::Sandbox;

#[test]
fn test_install_records_entry_and_writes_launcher() {
    let sandbox = Sandbox::new();
    let source = sandbox.service("fizz", None);

    sandbox.install(
        "fizz",
        &source,
        &["-e", "FIZZ=BUZZ", "--env", "JAZZ=FUNK", "-r", "origin/master", "-s", "5"],
    );

    let doc = sandbox.registry();
    let entry = &doc["dips"]["fizz"];
    assert_eq!(entry["name"], "fizz");
    assert_eq!(entry["path"], source.to_string_lossy().as_ref());
    assert_eq!(entry["home"], sandbox.bin().to_string_lossy().as_ref());
    assert_eq!(entry["env"]["FIZZ"], "BUZZ");
    assert_eq!(entry["env"]["JAZZ"], "FUNK");
    assert_eq!(entry["remote"], "origin");
    assert_eq!(entry["branch"], "master");
    assert_eq!(entry["sleep"], 5);

    let launcher = std::fs::read_to_string(sandbox.bin().join("fizz")).unwrap();
    assert_eq!(launcher, "#!/bin/sh\nexec dip run fizz -- \"$@\"\n");
}

#[cfg(unix)]
#[test]
fn test_install_launcher_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let sandbox = Sandbox::new();
    sandbox.install("fizz", &sandbox.service("fizz", None), &[]);

    let mode = std::fs::metadata(sandbox.bin().join("fizz"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_install_path_flag_overrides_bin_env() {
    let sandbox = Sandbox::new();
    let other = sandbox.service("other-bin", None);

    sandbox.install(
        "fizz",
        &sandbox.service("fizz", None),
        &["--path", other.to_str().unwrap()],
    );

    assert!(other.join("fizz").is_file());
    assert!(!sandbox.bin().join("fizz").exists());
}

#[test]
fn test_install_remote_without_branch_omits_branch() {
    let sandbox = Sandbox::new();
    sandbox.install("fizz", &sandbox.service("fizz", None), &["--remote", "origin"]);

    let doc = sandbox.registry();
    assert_eq!(doc["dips"]["fizz"]["remote"], "origin");
    assert!(doc["dips"]["fizz"].get("branch").is_none());
}

#[test]
fn test_install_invalid_env_pair_fails_without_saving() {
    let sandbox = Sandbox::new();
    let source = sandbox.service("fizz", None);

    sandbox
        .dip()
        .arg("install")
        .arg("fizz")
        .arg(&source)
        .args(["-e", "NOEQUALS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid environment variable 'NOEQUALS'"));

    assert!(!sandbox.config().exists());
}

#[test]
fn test_install_invalid_name_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .dip()
        .arg("install")
        .arg("../evil")
        .arg(sandbox.service("fizz", None))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name"));
}

#[test]
fn test_uninstall_removes_entry_and_launcher() {
    let sandbox = Sandbox::new();
    sandbox.install("fizz", &sandbox.service("fizz", None), &[]);
    sandbox.install("buzz", &sandbox.service("buzz", None), &[]);

    sandbox.dip().args(["uninstall", "fizz"]).assert().success();

    let doc = sandbox.registry();
    assert!(doc["dips"].get("fizz").is_none());
    assert!(doc["dips"].get("buzz").is_some());
    assert!(!sandbox.bin().join("fizz").exists());
}

#[test]
fn test_uninstall_unknown_name_fails() {
    Sandbox::new()
        .dip()
        .args(["uninstall", "fizz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'fizz' is not installed."));
}
