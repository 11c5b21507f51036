//! `dip config`: print values from the registry.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;
use crate::output::json;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Key path below the installed services, e.g. `fizz env FIZZ`
    pub keys: Vec<String>,
}

/// Run `dip config [keys...]`.
///
/// # Errors
///
/// Returns [`crate::domain::ConfigError::UnknownKey`] if the key path does
/// not exist.
pub fn run(app: &AppContext, args: &ConfigArgs) -> Result<ExitCode> {
    let registry = app.store.load();
    let value = registry.query(&args.keys)?;
    println!("{}", json::format_value(&value)?);
    Ok(ExitCode::SUCCESS)
}
