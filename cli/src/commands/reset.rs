//! `dip reset`: delete the registry.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;

/// Arguments for the reset command.
#[derive(Args)]
pub struct ResetArgs {
    /// Do not ask for confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Run `dip reset`.
///
/// Launchers already written are left in place.
///
/// # Errors
///
/// Returns an error if the prompt fails or the registry file cannot be
/// removed.
pub fn run(app: &AppContext, args: &ResetArgs) -> Result<ExitCode> {
    let path = app.store.path().display().to_string();
    if !args.force && !app.confirm(&format!("Delete {path}?"))? {
        println!("Cancelled.");
        return Ok(ExitCode::SUCCESS);
    }
    app.store.reset()?;
    app.output.success(&format!("Removed {path}"));
    Ok(ExitCode::SUCCESS)
}
