//! `dip run`: run an installed service.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;
use crate::application::services::run as run_service;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Name of the installed service
    pub name: String,

    /// Arguments forwarded to the service
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Run `dip run <name> [-- args...]`.
///
/// On unix this replaces the current process and only returns on failure.
///
/// # Errors
///
/// Returns an error if `name` is not installed or docker-compose cannot be
/// started.
pub fn run(app: &AppContext, args: &RunArgs) -> Result<ExitCode> {
    let registry = app.store.load();
    let entry = registry.lookup(&args.name)?;
    Ok(run_service::run(&app.process, entry, &args.args)?)
}
