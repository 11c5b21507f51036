//! `dip uninstall`: remove a service and its launcher.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;
use crate::application::services::registry;
use crate::domain::EntryError;

/// Run `dip uninstall <name>`.
///
/// # Errors
///
/// Returns [`EntryError::NotFound`] if `name` is not installed, or an error
/// if the launcher cannot be removed or the registry cannot be saved.
pub fn run(app: &AppContext, name: &str) -> Result<ExitCode> {
    let mut registry = app.store.load();
    if !registry::uninstall(&mut registry, &app.launcher, &app.reporter(), name)? {
        return Err(EntryError::NotFound(name.to_string()).into());
    }
    app.store.save(&registry)?;
    Ok(ExitCode::SUCCESS)
}
