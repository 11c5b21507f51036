//! Seams between the services and the outside world.
//!
//! Every effect a service needs (git, docker-compose, the registry file,
//! launcher scripts, `exec`) goes through one of these traits. Only
//! `crate::domain` is imported here.

use std::path::{Path, PathBuf};
use std::process::{ExitCode, Output};
use std::time::Duration;

use anyhow::Result;

use crate::domain::{ConfigError, ExecError, Invocation, Registry};

// ── Registry Store Port ───────────────────────────────────────────────────────

/// Where the registry document lives and how it is written.
pub trait RegistryStore {
    /// Load the registry. Never fails: a missing, unreadable or corrupt
    /// document yields an empty registry bound to [`RegistryStore::path`].
    fn load(&self) -> Registry;
    /// Persist `registry` to the path it was loaded from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Save`] on any write or serialization failure.
    fn save(&self, registry: &Registry) -> Result<(), ConfigError>;
    /// Delete the persisted document. A missing document is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Reset`] if the file exists but cannot be removed.
    fn reset(&self) -> Result<(), ConfigError>;
    /// Location of the persisted document.
    fn path(&self) -> &Path;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Spawns external programs and collects their output.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` under the runner's default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run `program`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Spawn failure, or `timeout` elapsing. A timed-out child is killed.
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Version Control Port ──────────────────────────────────────────────────────

/// Result of comparing a committed blob with a working-copy file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Contents match.
    Clean,
    /// Contents differ; carries the textual diff.
    Diverged(String),
}

/// Version-control queries against the working copy holding a definition.
#[allow(async_fn_in_trait)]
pub trait VersionControl {
    /// Name of the branch currently checked out at `path`.
    async fn active_branch(&self, path: &Path) -> Result<String>;
    /// Top-level directory of the repository containing `path`.
    async fn toplevel(&self, path: &Path) -> Result<PathBuf>;
    /// Update remote-tracking refs for `remote`.
    async fn fetch(&self, path: &Path, remote: &str) -> Result<()>;
    /// Compare blob `target` (`<rev>:<path>`) with the file at `local`.
    ///
    /// # Errors
    ///
    /// Returns an error when the comparison is inconclusive (spawn failure,
    /// unknown revision, timeout).
    async fn diff(&self, path: &Path, target: &str, local: &Path) -> Result<DiffOutcome>;
}

// ── Compose Ports ─────────────────────────────────────────────────────────────

/// Locates and reads service-definition files.
pub trait DefinitionResolver {
    /// Definition files in `dir`: the primary file first, then overrides.
    /// Empty when `dir` holds no recognised definition.
    fn definition_files(&self, dir: &Path) -> Vec<PathBuf>;
    /// Read one definition file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> Result<String>;
    /// Physical location of `path`, with symlinks and `..` resolved.
    /// `path` is returned unchanged when it cannot be resolved.
    fn canonical(&self, path: &Path) -> PathBuf;
}

/// Container-engine operations on a compose service.
#[allow(async_fn_in_trait)]
pub trait ComposeEngine {
    /// Pull the images of `service` as declared by `files`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Pull`] (wrapped) if the engine reports a failure.
    async fn pull(&self, files: &[PathBuf], service: &str) -> Result<()>;
}

// ── Process Launcher Port ─────────────────────────────────────────────────────

/// Executable resolution and process replacement.
pub trait ProcessLauncher {
    /// Absolute path of `program` found on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::ExecutableNotFound`] if it cannot be located.
    fn locate(&self, program: &str) -> Result<PathBuf, ExecError>;
    /// Replace the current process with `invocation`.
    ///
    /// On unix this only returns on failure. Where process replacement is
    /// unavailable the child is awaited and its exit status returned.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Launch`] if the program cannot be started.
    fn exec(&self, invocation: &Invocation) -> Result<ExitCode, ExecError>;
}

// ── Launcher Artifact Port ────────────────────────────────────────────────────

/// Writes and removes launcher shims.
#[cfg_attr(test, mockall::automock)]
pub trait LauncherWriter {
    /// Write the launcher for `name` into `install_dir`, returning its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    fn write(&self, install_dir: &Path, name: &str) -> Result<PathBuf>;
    /// Remove the launcher for `name` from `install_dir`. Missing is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing launcher cannot be removed.
    fn remove(&self, install_dir: &Path, name: &str) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait; no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
