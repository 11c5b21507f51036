//! Application service: install/uninstall use-cases.
//!
//! Both operations mutate the in-memory [`Registry`] only; the caller is
//! responsible for persisting it through `RegistryStore::save`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{LauncherWriter, ProgressReporter};
use crate::domain::{EnvVars, Entry, Registry, RemotePin};

/// Inputs for [`install`], as collected by the command layer.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub name: String,
    pub source_path: PathBuf,
    pub install_path: PathBuf,
    pub env: EnvVars,
    /// Combined `<remote>[/<branch>]` token.
    pub remote: Option<String>,
    pub sleep: Option<u64>,
}

/// Install (or re-install) an entry.
///
/// Steps:
/// 1. Build and validate the entry, splitting the remote token
/// 2. Write its launcher via `LauncherWriter`
/// 3. Insert it into the registry, replacing any entry of the same name
///
/// # Errors
///
/// Returns an error if validation fails or the launcher cannot be written.
/// The registry is left untouched on error.
pub fn install(
    registry: &mut Registry,
    launcher: &impl LauncherWriter,
    reporter: &impl ProgressReporter,
    request: InstallRequest,
) -> Result<Entry> {
    let pin = request
        .remote
        .as_deref()
        .map(RemotePin::parse)
        .transpose()?;
    let entry = Entry::new(request.name, request.source_path, request.install_path)?
        .with_env(request.env)
        .with_pin(pin)
        .with_sleep(request.sleep);

    reporter.step(&format!("writing launcher for '{entry}'..."));
    let exe = launcher
        .write(entry.install_path(), entry.name())
        .with_context(|| format!("installing launcher for '{entry}'"))?;
    tracing::debug!(entry = %entry, launcher = %exe.display(), "launcher written");

    if let Some(previous) = registry.insert(entry.clone()) {
        tracing::info!(entry = %entry, previous = %previous.source_path().display(), "replaced existing entry");
        reporter.warn(&format!(
            "replaced existing '{entry}' (was {})",
            previous.source_path().display()
        ));
    }
    reporter.success(&format!("installed '{entry}' to {}", exe.display()));
    Ok(entry)
}

/// Uninstall an entry: remove its launcher, then its registry record.
///
/// Returns `false` when `name` is not installed; nothing is touched then.
///
/// # Errors
///
/// Returns an error if the launcher exists but cannot be removed. The
/// registry still holds the entry in that case.
pub fn uninstall(
    registry: &mut Registry,
    launcher: &impl LauncherWriter,
    reporter: &impl ProgressReporter,
    name: &str,
) -> Result<bool> {
    let Some(entry) = registry.get(name) else {
        tracing::debug!(name, "uninstall requested for unknown entry");
        return Ok(false);
    };
    launcher
        .remove(entry.install_path(), entry.name())
        .with_context(|| format!("removing launcher for '{entry}'"))?;
    tracing::debug!(entry = %entry, launcher = %entry.launcher_path().display(), "launcher removed");
    registry.remove(name);
    reporter.success(&format!("uninstalled '{name}'"));
    Ok(true)
}
