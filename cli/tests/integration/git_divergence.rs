//! `dip diff` against a real git clone.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::support::{DEFINITION, Sandbox};

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=dip", "-c", "user.email=dip@example.com"])
        .args(args)
        .status()
        .expect("spawn git");
    assert!(status.success(), "git {args:?} failed");
}

/// An upstream repository with `svc/fizz/docker-compose.yml` on `master`,
/// cloned as `wc`. Returns the clone, or `None` when git is unavailable.
fn clone_with_definition(root: &Path) -> Option<PathBuf> {
    which::which("git").ok()?;
    let upstream = root.join("upstream");
    std::fs::create_dir_all(upstream.join("svc/fizz")).expect("upstream dir");
    std::fs::write(upstream.join("svc/fizz/docker-compose.yml"), DEFINITION).expect("definition");
    git(&upstream, &["-c", "init.defaultBranch=master", "init", "-q"]);
    git(&upstream, &["checkout", "-q", "-B", "master"]);
    git(&upstream, &["add", "."]);
    git(&upstream, &["commit", "-q", "-m", "add fizz"]);

    let wc = root.join("wc");
    git(root, &["clone", "-q", "upstream", "wc"]);
    std::fs::create_dir_all(wc.join("svc/other")).expect("sibling dir");
    Some(wc)
}

#[test]
fn test_diff_clean_through_parent_dir_component() {
    let sandbox = Sandbox::new();
    let Some(wc) = clone_with_definition(sandbox.root()) else {
        return;
    };
    sandbox.install("fizz", &wc.join("svc/other/../fizz"), &["-r", "origin/master"]);

    sandbox
        .dip()
        .args(["diff", "fizz", "--exit-code"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_diff_clean_through_symlinked_checkout() {
    let sandbox = Sandbox::new();
    let Some(wc) = clone_with_definition(sandbox.root()) else {
        return;
    };
    let link = sandbox.root().join("link");
    std::os::unix::fs::symlink(&wc, &link).expect("symlink");
    sandbox.install("fizz", &link.join("svc/fizz"), &["-r", "origin/master"]);

    sandbox
        .dip()
        .args(["diff", "fizz", "--exit-code"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_diff_reports_local_edit_through_parent_dir_component() {
    let sandbox = Sandbox::new();
    let Some(wc) = clone_with_definition(sandbox.root()) else {
        return;
    };
    std::fs::write(
        wc.join("svc/fizz/docker-compose.yml"),
        "services:\n  fizz:\n    image: busybox\n",
    )
    .expect("edit definition");
    sandbox.install("fizz", &wc.join("svc/other/../fizz"), &["-r", "origin/master"]);

    sandbox
        .dip()
        .args(["diff", "fizz", "--exit-code"])
        .assert()
        .failure()
        .stdout(predicates::str::contains("+    image: busybox"));
}
