//! `dip install`: register a service and write its launcher.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;
use crate::application::services::registry::{self, InstallRequest};
use crate::domain::EnvVars;

/// Environment variable overriding the default launcher directory.
pub const BIN_ENV: &str = "DIP_BIN";

/// Launcher directory used when neither `--path` nor `DIP_BIN` is given.
pub const DEFAULT_BIN: &str = "/usr/local/bin";

/// Arguments for the install command.
#[derive(Args)]
pub struct InstallArgs {
    /// Name of the service to install
    pub name: String,

    /// Directory holding the service definition
    #[arg(value_name = "PATH")]
    pub source: PathBuf,

    /// Environment variable passed to the service (repeatable)
    #[arg(short, long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Directory the launcher is written to
    #[arg(short = 'p', long = "path", value_name = "BIN", env = BIN_ENV, default_value = DEFAULT_BIN)]
    pub bin: PathBuf,

    /// Remote (and optional branch) to check for divergence, e.g. origin/master
    #[arg(short, long, value_name = "REMOTE[/BRANCH]")]
    pub remote: Option<String>,

    /// Seconds to pause after a divergence warning
    #[arg(short, long, value_name = "SECS")]
    pub sleep: Option<u64>,
}

/// Run `dip install`.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the launcher cannot be
/// written, or the registry cannot be saved.
pub fn run(app: &AppContext, args: InstallArgs) -> Result<ExitCode> {
    let env = EnvVars::parse_pairs(&args.env)?;
    let source_path = std::path::absolute(&args.source)
        .with_context(|| format!("resolving {}", args.source.display()))?;
    let install_path = std::path::absolute(&args.bin)
        .with_context(|| format!("resolving {}", args.bin.display()))?;

    let mut registry = app.store.load();
    registry::install(
        &mut registry,
        &app.launcher,
        &app.reporter(),
        InstallRequest {
            name: args.name,
            source_path,
            install_path,
            env,
            remote: args.remote,
            sleep: args.sleep,
        },
    )?;
    app.store.save(&registry)?;
    Ok(ExitCode::SUCCESS)
}
