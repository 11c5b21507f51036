//! Shared helpers for spawning `dip` against a throwaway home.

#![allow(clippy::expect_used, dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const DEFINITION: &str = "services:\n  fizz:\n    image: alpine\n";

/// A temp directory holding the registry, launcher dir and service sources.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("settings.json")
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// Create a service source directory, optionally with a definition.
    pub fn service(&self, name: &str, definition: Option<&str>) -> PathBuf {
        let dir = self.dir.path().join("src").join(name);
        std::fs::create_dir_all(&dir).expect("service dir");
        if let Some(text) = definition {
            std::fs::write(dir.join("docker-compose.yml"), text).expect("definition");
        }
        dir
    }

    /// `dip` with the sandbox environment applied.
    pub fn dip(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dip"));
        cmd.env("DIP_CONFIG", self.config())
            .env("DIP_BIN", self.bin())
            .env("NO_COLOR", "1")
            .env_remove("DIP_LOG")
            .env_remove("DIP_YES");
        cmd
    }

    /// Install `name` from `source` with extra flags, asserting success.
    pub fn install(&self, name: &str, source: &Path, extra: &[&str]) {
        self.dip()
            .arg("install")
            .arg(name)
            .arg(source)
            .args(extra)
            .assert()
            .success();
    }

    pub fn registry(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.config()).expect("registry file");
        serde_json::from_str(&raw).expect("registry json")
    }
}
